use anyhow::Result;

pub fn run(port: u16, no_open: bool) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;

    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
        let actual_port = listener.local_addr()?.port();
        println!("docflow UI → http://localhost:{actual_port}");

        tokio::select! {
            res = docflow_server::serve_on(listener, !no_open) => res,
            _ = tokio::signal::ctrl_c() => Ok(()),
        }
    })
}

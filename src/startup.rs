use crate::{
    configuration::{LandingSettings, Settings},
    crm_client::CrmClient,
    routes::*,
};
use actix_web::{dev::Server, web::Data, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, std::io::Error> {
        let crm_client = configuration
            .upstream
            .client()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, crm_client, configuration.landing)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    crm_client: CrmClient,
    landing: LandingSettings,
) -> Result<Server, std::io::Error> {
    let crm_client = Data::new(crm_client);
    let landing = Data::new(landing);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .service(health_check)
            .service(submit_contact)
            .app_data(crm_client.clone())
            .app_data(landing.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

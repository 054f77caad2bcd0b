use crate::configuration::Settings;
use crate::email_client::EmailClient;
use crate::notification::NotificationRecipient;
use crate::rate_limit::RateLimiter;
use crate::routes;
use actix_web::{dev::Server, web, App, HttpServer};
use anyhow::Context;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Everything fallible about getting the service off the ground happens here: binding
    /// the listener, parsing the sender/recipient addresses, building the relay client.
    /// A misconfiguration is a boot error, not a failure on the first submission.
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let sender = configuration
            .email_client
            .sender()
            .map_err(|e| anyhow::anyhow!(e))
            .context("Invalid sender email address")?;
        let recipient = configuration
            .email_client
            .recipient()
            .map_err(|e| anyhow::anyhow!(e))
            .context("Invalid recipient email address")?;

        let timeout = configuration.email_client.timeout();
        let email_client = EmailClient::new(
            configuration.email_client.base_url,
            sender,
            configuration.email_client.authorization_token,
            timeout,
        )
        .context("Failed to build the relay client")?;

        let rate_limiter = RateLimiter::new(
            configuration.rate_limit.max_requests,
            configuration.rate_limit.window(),
        );

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(&address)
            .with_context(|| format!("Failed to bind {address}"))?;
        // Retrieve the port assigned to us by the OS - the configuration may have asked
        // for port 0.
        let port = listener.local_addr()?.port();
        let server = run(
            listener,
            email_client,
            rate_limiter,
            NotificationRecipient(recipient),
        )?;

        // We "save" the bound port in one of `Application`'s fields.
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// A more expressive name that makes it clear that this function only returns when the
    /// application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    email_client: EmailClient,
    rate_limiter: RateLimiter,
    recipient: NotificationRecipient,
) -> Result<Server, std::io::Error> {
    // Wrap the shared state in smart pointers
    let email_client = web::Data::new(email_client);
    let rate_limiter = web::Data::new(rate_limiter);
    let recipient = web::Data::new(recipient);
    // An unparsable body would normally get actix-web's own plain-text error response;
    // rewrap it so that clients always see the `{"success": ..., "message": ...}` envelope.
    let json_config = web::JsonConfig::default().error_handler(|error, _req| {
        let response = actix_web::HttpResponse::BadRequest()
            .json(routes::ApiResponse::failure(error.to_string()));
        actix_web::error::InternalError::from_response(error, response).into()
    });
    let server = HttpServer::new(move || {
        App::new()
            // Middlewares are added using the `wrap` method on `App`
            .wrap(TracingLogger::default())
            .route("/health", web::get().to(routes::health))
            .route("/submit-form", web::post().to(routes::submit_form))
            // Anything else is a 404 with the same response envelope
            .default_service(web::route().to(routes::not_found))
            // Register the shared state as part of the application state
            .app_data(json_config.clone())
            .app_data(email_client.clone())
            .app_data(rate_limiter.clone())
            .app_data(recipient.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

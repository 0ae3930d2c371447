mod cofg;
mod error;
mod pages;
mod routes;
mod templating;
#[cfg(test)]
mod test;

use actix_web::{
  App,
  HttpServer,
  body::MessageBody,
  dev::{ ServiceFactory, ServiceRequest, ServiceResponse },
  http::KeepAlive,
  middleware,
  web,
};
use clap::Parser;
use log::{ debug, info };

use crate::cofg::{ build_config_from_cli, cli::Args, config::{ Cofg, CofgMiddleware } };
use crate::templating::Templates;

pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

fn init_logger() {
  env_logger
    ::builder()
    .default_format()
    .format_module_path(true)
    .format_line_number(true)
    .format_timestamp(None)
    .filter_level(log::LevelFilter::Info)
    .parse_default_env()
    .init();
}

/// Routes plus the middleware stack selected by `middleware.*`.
///
/// WHY: `run_server` builds one per worker and the tests build the same one, so both see the
/// middleware order and toggles from a single place.
pub(crate) fn build_app(
  mw: &CofgMiddleware,
  templates: web::Data<Templates>
) -> App<
  impl ServiceFactory<
    ServiceRequest,
    Config = (),
    Response = ServiceResponse<impl MessageBody + use<>>,
    Error = actix_web::Error,
    InitError = ()
  > + use<>
> {
  App::new()
    .app_data(templates)
    .wrap(
      middleware::Condition::new(
        mw.normalize_path,
        middleware::NormalizePath::new(middleware::TrailingSlash::Always)
      )
    )
    .wrap(middleware::Condition::new(mw.compress, middleware::Compress::default()))
    .wrap(middleware::Condition::new(mw.logger.enabling, middleware::Logger::new(&mw.logger.format)))
    .configure(routes::configure)
}

async fn run_server(c: Cofg, templates: web::Data<Templates>) -> std::io::Result<()> {
  info!("run in http://{}/", c.addrs);
  let addrs = c.addrs.clone();
  let mw = c.middleware;

  HttpServer::new(move || build_app(&mw, templates.clone()))
    .keep_alive(KeepAlive::Os)
    .bind(addrs)?
    .run().await
}

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  init_logger();
  let args = Args::parse();
  let c = build_config_from_cli(Cofg::load(&args.config)?, &args);
  debug!("cofg: {c:#?}");

  let templates = web::Data::new(Templates::new(&c)?);
  run_server(c, templates).await?;
  Ok(())
}

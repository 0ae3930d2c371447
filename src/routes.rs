//! Route table: every page the site serves, by name.
//!
//! Each route is registered as a named actix resource, so besides `reverse` below handlers can
//! build URLs with `HttpRequest::url_for(name, ..)`. Only GET is routed; other methods on a page
//! path answer 405.

use actix_web::{ HttpRequest, HttpResponse, http::header::ContentType, web };
use log::{ debug, warn };

use crate::{ error::{ AppError, AppResult }, pages, templating::Templates };

/// A named binding from an HTTP path to the template its handler renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Route {
  pub(crate) name: &'static str,
  pub(crate) path: &'static str,
  pub(crate) template: &'static str,
}

pub(crate) const AMIN_MESSAGE: Route = Route {
  name: "Amin_message",
  path: "/Amin_message/",
  template: "home.html",
};

pub(crate) const PM_A: Route = Route {
  name: "PM_A",
  path: "/PM_A/",
  template: "S_D.html",
};

pub(crate) const ROUTES: [Route; 2] = [AMIN_MESSAGE, PM_A];

/// Resolve a route name to its path.
pub(crate) fn reverse(name: &str) -> AppResult<&'static str> {
  ROUTES.iter()
    .find(|r| r.name == name)
    .map(|r| r.path)
    .ok_or_else(|| AppError::NoReverseMatch(name.to_string()))
}

/// Register every page plus the 404 fallback on an app.
pub(crate) fn configure(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::resource(AMIN_MESSAGE.path).name(AMIN_MESSAGE.name).route(web::get().to(pages::message::message_page))
  )
    .service(web::resource(PM_A.path).name(PM_A.name).route(web::get().to(pages::pm::pm_page)))
    .default_service(web::to(not_found));
}

/// Render `404.html`, plain text when that template fails.
async fn not_found(req: HttpRequest, templates: web::Data<Templates>) -> HttpResponse {
  debug!("{}: no route", req.path());
  match templates.render_not_found(req.path()) {
    Ok(html) => HttpResponse::NotFound().insert_header(ContentType::html()).body(html),
    Err(err) => {
      warn!("{err}");
      HttpResponse::NotFound().insert_header(ContentType::plaintext()).body("404 Not Found")
    }
  }
}

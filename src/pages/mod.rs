//! Page handlers.
//!
//! Every page is a stateless GET handler that renders its route's template. The template name is
//! attached to the response as a `RenderedTemplate` extension so callers (and tests) can tell
//! which template produced a body without parsing it.

pub(crate) mod message;
pub(crate) mod pm;

use actix_web::{ HttpResponse, http::header::ContentType };

use crate::{ error::AppResult, routes::Route, templating::Templates };

/// Name of the template that rendered a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RenderedTemplate(pub(crate) &'static str);

/// `200 OK` with the route's template rendered as `text/html; charset=utf-8`.
pub(crate) fn render_page(templates: &Templates, route: &Route) -> AppResult<HttpResponse> {
  let html = templates.render_route(route)?;
  let mut res = HttpResponse::Ok().insert_header(ContentType::html()).body(html);
  res.extensions_mut().insert(RenderedTemplate(route.template));
  Ok(res)
}

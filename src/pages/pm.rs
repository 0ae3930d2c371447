use actix_web::{ HttpResponse, web };

use crate::{ error::AppResult, routes::PM_A, templating::Templates };

/// `PM_A` page, rendered from `S_D.html`.
pub(crate) async fn pm_page(templates: web::Data<Templates>) -> AppResult<HttpResponse> {
  super::render_page(&templates, &PM_A)
}

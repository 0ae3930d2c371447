//! Message page (`Amin_message`): the site's welcome page.

use actix_web::{ HttpResponse, web };

use crate::{ error::AppResult, routes::AMIN_MESSAGE, templating::Templates };

pub(crate) async fn message_page(templates: web::Data<Templates>) -> AppResult<HttpResponse> {
  super::render_page(&templates, &AMIN_MESSAGE)
}

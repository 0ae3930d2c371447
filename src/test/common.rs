use actix_web::web;

use crate::{ cofg::config::Cofg, templating::Templates };

/// Engine built from the default config, as `main` would share it.
pub(crate) fn templates() -> web::Data<Templates> {
  web::Data::new(Templates::new(&Cofg::default()).unwrap())
}

/// Engine whose template directory is `dir`.
pub(crate) fn templates_in(dir: &std::path::Path, hot_reload: bool) -> Templates {
  let mut c = Cofg::default();
  c.templating.dir = dir.display().to_string();
  c.templating.hot_reload = hot_reload;
  Templates::new(&c).unwrap()
}

/// Serializes tests that read or write process environment variables (`Cofg::load` reads
/// `AMIN_SITE__*`).
pub(crate) fn env_lock() -> std::sync::MutexGuard<'static, ()> {
  use std::sync::{ Mutex, OnceLock };
  static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
  LOCK.get_or_init(|| Mutex::new(())).lock().unwrap_or_else(|e| e.into_inner())
}

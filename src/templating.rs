//! templating
//!
//! Page templates are handlebars files registered under their file names. Each one is read from
//! `templating.dir` when present there, otherwise the copy compiled into the binary is used, so
//! the site renders with no files next to the executable.
//!
//! With `templating.hot_reload` the engine runs in dev mode and re-reads disk templates on every
//! render; built-in copies never change.

use std::path::Path;

use handlebars::Handlebars;
use log::{ debug, warn };
use serde_json::{ Map, Number, Value };

use crate::{ cofg::config::Cofg, error::AppResult, routes::Route };

pub(crate) const NOT_FOUND_TEMPLATE: &str = "404.html";

/// `(name, source)` for every template the site can render.
pub(crate) const BUILTIN_TEMPLATES: [(&str, &str); 3] = [
  ("home.html", include_str!("../templates/home.html")),
  ("S_D.html", include_str!("../templates/S_D.html")),
  (NOT_FOUND_TEMPLATE, include_str!("../templates/404.html")),
];

/// Rendering engine plus the context shared by every page. Built once, shared via `web::Data`.
pub(crate) struct Templates {
  hbs: Handlebars<'static>,
  context: Map<String, Value>,
}

impl Templates {
  pub(crate) fn new(c: &Cofg) -> AppResult<Self> {
    Ok(Self { hbs: get_engine(c)?, context: get_context(c) })
  }

  /// Render the template bound to `route`, with `name` and `path` added to the context.
  pub(crate) fn render_route(&self, route: &Route) -> AppResult<String> {
    let mut context = self.context.clone();
    context.insert("name".to_string(), Value::from(route.name));
    context.insert("path".to_string(), Value::from(route.path));
    self.render(route.template, &context)
  }

  pub(crate) fn render_not_found(&self, path: &str) -> AppResult<String> {
    let mut context = self.context.clone();
    context.insert("path".to_string(), Value::from(path));
    self.render(NOT_FOUND_TEMPLATE, &context)
  }

  #[cfg(test)]
  pub(crate) fn has_template(&self, name: &str) -> bool {
    self.hbs.has_template(name)
  }

  fn render(&self, name: &str, context: &Map<String, Value>) -> AppResult<String> {
    debug!("render {name}");
    Ok(self.hbs.render(name, context)?)
  }
}

/// Build the handlebars registry, preferring files in `templating.dir` over built-ins.
pub(crate) fn get_engine(c: &Cofg) -> AppResult<Handlebars<'static>> {
  let mut hbs = Handlebars::new();
  hbs.set_dev_mode(c.templating.hot_reload);

  let dir = Path::new(&c.templating.dir);
  for (name, builtin) in BUILTIN_TEMPLATES {
    let on_disk = dir.join(name);
    if on_disk.is_file() {
      debug!("template {name} <- {}", on_disk.display());
      hbs.register_template_file(name, &on_disk)?;
    } else {
      debug!("template {name} <- built-in");
      hbs.register_template_string(name, builtin)?;
    }
  }
  Ok(hbs)
}

/// Context every page starts from: server version plus configured `templating.value` entries.
pub(crate) fn get_context(c: &Cofg) -> Map<String, Value> {
  let mut context = Map::new();
  context.insert("server_version".to_string(), Value::from(crate::VERSION));
  for template_data in c.templating.value.iter().flatten() {
    set_context_value(&mut context, template_data);
  }
  context
}

/// Parse one `key:value` entry into `context`.
///
/// `true`/`false` become booleans, integers and finite floats become numbers, anything else is
/// kept as a string. Only the first `:` splits, so values may contain colons; whitespace around
/// the key and value is ignored.
pub(crate) fn set_context_value(context: &mut Map<String, Value>, template_data: &str) {
  let Some((key, raw)) = template_data.split_once(':') else {
    warn!("templating value `{template_data}` has no `:`, skipped");
    return;
  };
  let (key, raw) = (key.trim(), raw.trim());
  if key.is_empty() {
    warn!("templating value `{template_data}` has an empty key, skipped");
    return;
  }

  let value = if let Ok(b) = raw.parse::<bool>() {
    Value::Bool(b)
  } else if let Ok(i) = raw.parse::<i64>() {
    Value::from(i)
  } else if let Some(n) = raw.parse::<f64>().ok().and_then(Number::from_f64) {
    Value::Number(n)
  } else {
    Value::from(raw)
  };
  context.insert(key.to_string(), value);
}

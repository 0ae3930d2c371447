//! Configuration (Cofg)
//!
//! Sources are layered lowest to highest precedence:
//! 1. the built-in `cofg.yaml` compiled into the binary
//! 2. the on-disk config file (written from the built-in copy when missing)
//! 3. environment variables `AMIN_SITE__<SECTION>__<KEY>`
//! 4. CLI overrides, applied afterwards by `build_config_from_cli`
//!
//! The result is loaded once in `main` and handed to the server by value; handlers never touch
//! the disk to read configuration.
//!
//! WHY: The built-in layer guarantees every key has a value, so a config file only needs the keys
//! it changes. The file is parsed as YAML whatever its extension, because `--config` accepts any
//! path. Environment variables sit above the file for container deployments where the file is
//! baked into the image.
//!
//! 中文說明：內建設定提供完整預設值，設定檔只需覆寫需要的鍵；設定檔不論副檔名皆以 YAML 解析；
//! 環境變數優先於設定檔，命令列參數最後覆寫。

use std::path::Path;

use log::info;
use nest_struct::nest_struct;

use crate::error::AppResult;

pub(crate) const BUILD_COFG: &str = include_str!("cofg.yaml");

/// Prefix for environment overrides, e.g. `AMIN_SITE__ADDRS__PORT=9000`.
pub(crate) const ENV_PREFIX: &str = "AMIN_SITE";

#[nest_struct]
#[derive(PartialEq, Clone, Debug, serde::Deserialize)]
pub(crate) struct Cofg {
  pub(crate) addrs: nest! {
      /// Server IP address (e.g., 127.0.0.1)
      pub(crate) ip: String,
      /// Server port (e.g., 80, 8080)
      pub(crate) port: u16,
    },
  pub(crate) middleware: nest! {
      /// Serve `/PM_A` with the `/PM_A/` route
      pub(crate) normalize_path: bool,
      /// Enable Compress middleware
      pub(crate) compress: bool,
      pub(crate) logger: nest! {
        /// Enable request logging
        pub(crate) enabling: bool,
        /// Logger output format
        pub(crate) format: String
      },
    },
  pub(crate) templating: nest! {
      /// Directory searched for page templates before the built-in copies
      pub(crate) dir: String,
      /// Re-read disk templates on every render
      pub(crate) hot_reload: bool,
      /// Extra render context entries, `key:value`
      pub(crate) value: Option<Vec<String>>,
    },
}

impl Default for Cofg {
  fn default() -> Self {
    Cofg::new_from_str(BUILD_COFG).expect("built-in cofg.yaml must deserialize")
  }
}

impl Cofg {
  /// Parse a complete YAML document, no other sources.
  pub(crate) fn new_from_str(data_str: &str) -> AppResult<Self> {
    let cofg = config::Config
      ::builder()
      .add_source(config::File::from_str(data_str, config::FileFormat::Yaml))
      .build()?
      .try_deserialize::<Self>()?;
    Ok(cofg)
  }

  /// Load the layered configuration rooted at `path`.
  ///
  /// A missing file is created from the built-in copy so operators have something to edit.
  pub(crate) fn load(path: &Path) -> AppResult<Self> {
    if !path.exists() {
      info!("write default cofg to {}", path.display());
      std::fs::write(path, BUILD_COFG)?;
    }
    let cofg = config::Config
      ::builder()
      .add_source(config::File::from_str(BUILD_COFG, config::FileFormat::Yaml))
      .add_source(config::File::from(path).format(config::FileFormat::Yaml).required(false))
      .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true))
      .build()?
      .try_deserialize::<Self>()?;
    Ok(cofg)
  }
}

impl std::fmt::Display for CofgAddrs {
  /// Format the address as `IP:Port`.
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}:{}", self.ip, self.port)
  }
}

impl std::net::ToSocketAddrs for CofgAddrs {
  type Iter = std::vec::IntoIter<std::net::SocketAddr>;

  fn to_socket_addrs(&self) -> std::io::Result<Self::Iter> {
    std::net::ToSocketAddrs::to_socket_addrs(&(self.ip.as_str(), self.port))
  }
}

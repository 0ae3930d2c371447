//! CLI argument parsing for overriding config
//!
//! WHY: Allow quick overrides (ip/port) without editing the config file. The surface stays small
//! so file-based settings remain the single place for everything else.
//!
//! 中文：提供最小集合的命令列參數覆寫設定檔（IP/Port/設定檔路徑），便於臨時調整。

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub(crate) struct Args {
  /// Listen IP, overrides `addrs.ip`
  #[arg(long)]
  pub(crate) ip: Option<String>,
  /// Listen port, overrides `addrs.port`
  #[arg(long)]
  pub(crate) port: Option<u16>,
  /// Config file, created from the built-in defaults when missing
  #[arg(long, default_value = "./cofg.yaml")]
  pub(crate) config: PathBuf,
}

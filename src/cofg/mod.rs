pub(crate) mod cli;
pub(crate) mod config;

/// Merge CLI overrides into loaded config.
///
/// WHY: Preserve file/env config as baseline; explicit CLI flags have the highest precedence and
/// each flag overrides only its own field.
/// 中文：以設定檔與環境變數為基礎，命令列參數僅覆寫對應欄位。
pub(crate) fn build_config_from_cli(mut s: config::Cofg, cli: &cli::Args) -> config::Cofg {
  if let Some(ip) = &cli.ip {
    s.addrs.ip = ip.clone();
  }
  if let Some(port) = cli.port {
    s.addrs.port = port;
  }
  s
}

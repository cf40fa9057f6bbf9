// SPDX-License-Identifier: MPL-2.0
use peek_gallery::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
peek_gallery

Image grid demo with press-and-hold previews.

USAGE:
  peek_gallery [OPTIONS]

OPTIONS:
  -h, --help               Print this help and exit
      --lang <LOCALE>      UI language (e.g. en-US, fr)
      --config-dir <DIR>   Directory holding settings.toml

ENVIRONMENT:
  PEEK_GALLERY_CONFIG_DIR  Config directory when --config-dir is absent
  RUST_LOG                 Log filter (e.g. peek_gallery=debug)
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring --lang");
        None
    });
    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring --config-dir");
        None
    });

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    tracing::info!("starting peek_gallery");

    app::run(Flags { lang, config_dir })
}

// SPDX-License-Identifier: MPL-2.0
use dns_console::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
dns_console: administration console for DNS filtering appliances

USAGE:
  dns_console [OPTIONS]

OPTIONS:
  --lang <LOCALE>        UI language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --server <URL>         Appliance base URL, overrides [server] url
  --route <PATH>         Start route (e.g. /filters)
  -h, --help             Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        server: args.opt_value_from_str("--server")?,
        route: args.opt_value_from_str("--route")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(flags)
}

fn main() -> iced::Result {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dns_console=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

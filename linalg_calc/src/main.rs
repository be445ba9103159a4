use std::process;

use clap::{Args as ClapArgs, Parser, Subcommand};
use env_logger::Env;
use linalg_calc::service::{ServerConfig, ServiceBuilder, ServiceKind};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    pub service: ServiceCommand,
}

#[derive(Subcommand, Debug)]
enum ServiceCommand {
    /// Scalar calculator: POST /calculate
    Calculator(ServeArgs),
    /// Matrix and vector operations: POST /add, /multiply, /rref, /inverse, ...
    Matrix(ServeArgs),
}

#[derive(ClapArgs, Debug)]
struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
    /// Defaults to 5000 for the calculator and 5001 for the matrix service
    #[arg(short, long)]
    pub port: Option<u16>,
    #[arg(long)]
    pub no_cors: bool,
}

impl ServiceCommand {
    fn into_config(self) -> (ServiceKind, ServerConfig) {
        let (kind, args) = match self {
            Self::Calculator(args) => (ServiceKind::Calculator, args),
            Self::Matrix(args) => (ServiceKind::Matrix, args),
        };
        let config = ServerConfig::for_service(kind)
            .with_host(args.host)
            .with_port(args.port.unwrap_or_else(|| kind.default_port()))
            .with_cors(!args.no_cors);
        (kind, config)
    }
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    log::debug!("Running with: {args:?}");
    let (kind, config) = args.service.into_config();
    if let Err(err) = ServiceBuilder::new(kind, config).run_appropriate_service() {
        eprintln!("{kind} service stopped with error: {err:?}");
        process::exit(1)
    }
}

use issue_fanout::config::{CliArgs, LazySecretsFile, ProcessEnv};
use issue_fanout::{FanoutRunner, Reporter, logging};
use std::env;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_logging();

    let args = CliArgs::parse(env::args().skip(1));
    let env = ProcessEnv;
    let secrets = LazySecretsFile::new(&env);
    let mut reporter = Reporter::stdio();

    let code = FanoutRunner::new(&env, &secrets)
        .run(args, &mut reporter)
        .await;

    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

use engine_logging::engine_error;

mod platform;

fn main() -> anyhow::Result<()> {
    platform::run_app().inspect_err(|err| engine_error!("doc-analyzer failed: {:#}", err))
}

use anyhow::Result;
use tricolor_engine::device::GpuSettings;
use tricolor_engine::logging::{LoggingConfig, init_logging};
use tricolor_engine::window::{Runtime, RuntimeConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    log::info!("hello world");

    Runtime::run(RuntimeConfig::default(), GpuSettings::from_env())
}

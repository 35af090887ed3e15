use md4ir::engine::aggregate::SpectrumGroup;
use md4ir::engine::config::SpectrumConfig;
use md4ir::workflows::spectrum::FailurePolicy;

pub struct AppConfig {
    pub groups: Vec<SpectrumGroup>,
    pub core_config: SpectrumConfig,
    pub policy: FailurePolicy,
}

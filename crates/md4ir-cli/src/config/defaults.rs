use md4ir::engine::config::SpectralMethod;

pub struct DefaultsConfig {
    pub scale: f64,
    pub timestep_fs: f64,
    pub time_start_ps: f64,
    pub time_end_ps: f64,
    pub wn_start: f64,
    pub wn_end: f64,
    pub method: SpectralMethod,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            timestep_fs: 0.5,
            time_start_ps: 0.0,
            time_end_ps: 20.0,
            wn_start: 0.0,
            wn_end: 4000.0,
            method: SpectralMethod::Autocorrelation,
        }
    }
}

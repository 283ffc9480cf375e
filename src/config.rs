//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable (`CONFIG`).
use once_cell::sync::Lazy;
use std::env;

pub struct AppConfig {
    pub logging: LoggingConfig,
}

pub struct LoggingConfig {
    /// Filtro estilo `env_logger`, p.ej. `info` o `kg_core=debug`.
    pub filter: String,
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    // .env es opcional; si no existe se usan los defaults
    let _ = dotenvy::dotenv();
    let filter = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    AppConfig { logging: LoggingConfig { filter } }
});

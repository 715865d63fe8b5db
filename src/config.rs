//! Configuración desde variables de entorno (con soporte para `.env`).

use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_OUTPUT: &str = "timetable.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind: String,
    /// Preferido al resolver; si no existe se busca desde el CWD.
    pub datafiles_dir: Option<PathBuf>,
    pub output: PathBuf,
}

impl Config {
    /// Lee `HORARIO_BIND`, `HORARIO_DATAFILES_DIR` y `HORARIO_OUTPUT`.
    /// Un `.env` en el CWD se carga primero si existe.
    pub fn from_env() -> Self {
        // ausencia de .env no es un error
        let _ = dotenv::dotenv();

        let non_empty = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());

        Config {
            bind: non_empty("HORARIO_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string()),
            datafiles_dir: non_empty("HORARIO_DATAFILES_DIR").map(PathBuf::from),
            output: non_empty("HORARIO_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        }
    }

    /// Mismo criterio que `datafiles::get_datafiles_dir`.
    pub fn resolved_datafiles_dir(&self) -> PathBuf {
        crate::datafiles::resolve_datafiles_dir(self.datafiles_dir.as_deref())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind: DEFAULT_BIND.to_string(),
            datafiles_dir: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

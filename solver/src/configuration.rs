use points_core::solver::Limits;
use std::fs::File;
use std::path::PathBuf;
extern crate serde_yaml;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Configuration {
    /// The solver program, relative paths are resolved against the working directory
    pub executable: PathBuf,
    pub timeout_ms: u64,
    /// The value every solution line ends with
    pub target: i64,
    pub limits: Limits,
}

impl Default for Configuration {
    fn default() -> Configuration {
        Configuration {
            executable: PathBuf::from("Hegel Infix.exe"),
            timeout_ms: 10000,
            target: 24,
            limits: Limits::default(),
        }
    }
}

impl Configuration {
    pub fn load(filename: &str) -> Result<Configuration, String> {
        let file = match File::open(filename) {
            Ok(f) => f,
            Err(msg) => return Err(format!("Opening {}: {}", filename, msg)),
        };
        match serde_yaml::from_reader(file) {
            Ok(r) => Ok(r),
            Err(msg) => Err(msg.to_string()),
        }
    }
}

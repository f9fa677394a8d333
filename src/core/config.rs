use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", cfg.to_yaml()?);
        Ok(())
    }

    /// Open `path` in `editor`, then `$EDITOR`/`$VISUAL`, then the platform
    /// default. Falls back once if the requested editor fails.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                println!("✅ Configuration file edited successfully using '{}'", editor_to_use);
                Ok(())
            }
            _ if editor_to_use != default_editor => {
                eprintln!(
                    "⚠️  Editor '{}' not available, falling back to '{}'",
                    editor_to_use, default_editor
                );
                match Command::new(&default_editor).arg(path).status() {
                    Ok(s) if s.success() => {
                        println!(
                            "✅ Configuration file edited successfully using fallback '{}'",
                            default_editor
                        );
                        Ok(())
                    }
                    _ => Err(AppError::Config(format!(
                        "failed to edit configuration file using '{}'",
                        default_editor
                    ))),
                }
            }
            _ => Err(AppError::Config(format!(
                "failed to edit configuration file using '{}'",
                editor_to_use
            ))),
        }
    }
}

use std::env;
use std::path::PathBuf;

pub fn user_home() -> Option<PathBuf> {
    home::home_dir()
}

pub fn user_config() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var_os("APPDATA").map(PathBuf::from)
    }
    #[cfg(target_os = "macos")]
    {
        user_home().map(|p| p.join("Library/Application Support"))
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| user_home().map(|p| p.join(".config")))
    }
}

/// Directory holding the running executable.
pub fn current_exe_dir() -> Option<PathBuf> {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_home_returns_optional() {
        let home = user_home();
        assert!(home.is_none() || !home.unwrap().as_os_str().is_empty());
    }

    #[test]
    fn test_user_config_platform_specific() {
        let config = user_config();
        #[cfg(target_os = "windows")]
        {
            assert!(config.is_none() || config.unwrap().to_string_lossy().contains("AppData"));
        }
        #[cfg(target_os = "macos")]
        {
            assert!(
                config.is_none()
                    || config
                        .unwrap()
                        .to_string_lossy()
                        .contains("Application Support")
            );
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        {
            if env::var_os("XDG_CONFIG_HOME").is_none() {
                assert!(config.is_none() || config.unwrap().to_string_lossy().contains(".config"));
            }
        }
    }

    #[test]
    fn test_current_exe_dir_is_absolute() {
        let dir = current_exe_dir().unwrap();
        assert!(dir.is_absolute());
        assert!(dir.is_dir());
    }
}

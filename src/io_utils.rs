use std::path::{Path, PathBuf};

pub fn save_json_to_file<T: serde::Serialize>(
    obj:       &T,
    file_name: &Path,
) -> anyhow::Result<()> {
    if let Some(dir) = file_name.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            std::fs::create_dir_all(dir)?;
        }
    }
    let text = serde_json::to_string_pretty(obj)?;
    std::fs::write(file_name, text)?;
    Ok(())
}

/// Leaves `obj` untouched if there is no such file
pub fn load_json_from_file<T: serde::de::DeserializeOwned>(
    obj:       &mut T,
    file_name: &Path,
) -> anyhow::Result<()> {
    if !file_name.is_file() { return Ok(()); }
    let file = std::io::BufReader::new(std::fs::File::open(file_name)?);
    *obj = serde_json::from_reader(file)?;
    Ok(())
}

pub fn get_app_dir() -> anyhow::Result<PathBuf> {
    let conf_dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("dirs::config_dir()"))?;
    let mut path = PathBuf::from(&conf_dir);
    path.push(format!(".{}", env!("CARGO_PKG_NAME")));
    Ok(path)
}

pub fn get_app_conf_file_name(conf_name: &str) -> anyhow::Result<PathBuf> {
    let mut path = get_app_dir()?;
    path.push(format!("{}.json", conf_name));
    Ok(path)
}

#[test]
fn test_json_file_missing() {
    let mut value = vec![1, 2, 3];
    let path = std::env::temp_dir().join("pikon_altaz_test_no_such_file.json");
    load_json_from_file(&mut value, &path).unwrap();
    assert_eq!(value, vec![1, 2, 3]);
}

#[test]
fn test_json_file_broken() {
    let path = std::env::temp_dir().join(format!(
        "pikon_altaz_test_broken_{}.json", std::process::id()
    ));
    std::fs::write(&path, "{ not json").unwrap();
    let mut value = 0_i32;
    assert!(load_json_from_file(&mut value, &path).is_err());
    _ = std::fs::remove_file(&path);
}

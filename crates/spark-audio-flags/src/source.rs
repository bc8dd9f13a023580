//! # source 模块说明
//!
//! ## 角色定位（Why）
//! - 开关的真实来源（环境变量、配置文件、测试桩）与"只读一次"的缓存语义正交，拆成 [`FlagSource`] 便于替换与计数。
//!
//! ## 契约（What）
//! - `read` 返回 `Ok(Some(v))` 表示来源给出了值，`Ok(None)` 表示来源对该开关无意见，`Err` 表示来源本身损坏；
//! - 来源实现必须 `Send + Sync`，缓存层可能在任意线程上调用它；
//! - [`LayeredFlags`] 按插入顺序询问，第一个给出值的来源胜出，遇到错误立即返回。

use std::{
    collections::BTreeMap,
    env, fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::Deserialize;

use crate::error::FlagError;

/// 布尔开关的外部来源。
pub trait FlagSource: Send + Sync {
    /// 读取开关 `flag` 的当前值。
    fn read(&self, flag: &str) -> Result<Option<bool>, FlagError>;
}

impl<S: FlagSource + ?Sized> FlagSource for Arc<S> {
    fn read(&self, flag: &str) -> Result<Option<bool>, FlagError> {
        (**self).read(flag)
    }
}

impl<S: FlagSource + ?Sized> FlagSource for Box<S> {
    fn read(&self, flag: &str) -> Result<Option<bool>, FlagError> {
        (**self).read(flag)
    }
}

/// 将文本解释为布尔：`true`/`false`（不区分大小写）或 `1`/`0`，允许首尾空白。
pub fn parse_bool(flag: &str, raw: &str) -> Result<bool, FlagError> {
    let trimmed = raw.trim();
    if trimmed == "1" || trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed == "0" || trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(FlagError::InvalidValue {
            flag: flag.to_owned(),
            value: raw.to_owned(),
        })
    }
}

/// 内存中的固定开关表，主要用于测试与嵌入式默认值。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedFlags {
    flags: BTreeMap<String, bool>,
}

impl FixedFlags {
    /// 空表。
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个开关，返回自身以便链式构造。
    #[must_use]
    pub fn with(mut self, flag: impl Into<String>, value: bool) -> Self {
        self.flags.insert(flag.into(), value);
        self
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for FixedFlags {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self {
            flags: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl FlagSource for FixedFlags {
    fn read(&self, flag: &str) -> Result<Option<bool>, FlagError> {
        Ok(self.flags.get(flag).copied())
    }
}

/// 环境变量来源：开关 `name` 对应变量 `<prefix><NAME>`。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvFlags {
    prefix: String,
}

impl EnvFlags {
    /// 以自定义前缀构造。
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// 开关对应的环境变量名：前缀 + 大写名称，`-` 与 `.` 替换为 `_`。
    pub fn var_name(&self, flag: &str) -> String {
        let suffix: String = flag
            .chars()
            .map(|c| match c {
                '-' | '.' => '_',
                other => other.to_ascii_uppercase(),
            })
            .collect();
        format!("{}{}", self.prefix, suffix)
    }
}

impl Default for EnvFlags {
    fn default() -> Self {
        Self::new(crate::process::FLAG_ENV_PREFIX)
    }
}

impl FlagSource for EnvFlags {
    fn read(&self, flag: &str) -> Result<Option<bool>, FlagError> {
        match env::var(self.var_name(flag)) {
            Ok(raw) => parse_bool(flag, &raw).map(Some),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(raw)) => Err(FlagError::InvalidValue {
                flag: flag.to_owned(),
                value: raw.to_string_lossy().into_owned(),
            }),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FlagDocument {
    #[serde(default)]
    flags: BTreeMap<String, bool>,
}

/// 已解析的 TOML 开关文档。
///
/// ```toml
/// [flags]
/// mutex_priority_inheritance = true
/// ```
///
/// 文档中的其他表被忽略；`[flags]` 中的值必须是布尔。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TomlFlags {
    flags: BTreeMap<String, bool>,
}

impl TomlFlags {
    /// 从文本解析。
    pub fn from_toml_str(text: &str) -> Result<Self, FlagError> {
        Self::parse(text, "<inline>")
    }

    /// 立即读取并解析文件。
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FlagError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| FlagError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, &path.display().to_string())
    }

    fn parse(text: &str, origin: &str) -> Result<Self, FlagError> {
        let document: FlagDocument = toml::from_str(text).map_err(|source| FlagError::Toml {
            origin: origin.to_owned(),
            source,
        })?;
        Ok(Self {
            flags: document.flags,
        })
    }

    /// 文档中声明的开关数量。
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// 文档是否未声明任何开关。
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

impl FlagSource for TomlFlags {
    fn read(&self, flag: &str) -> Result<Option<bool>, FlagError> {
        Ok(self.flags.get(flag).copied())
    }
}

/// 延迟读取的 TOML 文件来源：每次 `read` 都重新打开文件。
///
/// 配合 [`CachedFlag`](crate::CachedFlag) 使用时文件只会被读取一次，且读取失败会走缓存层的告警回退路径，
/// 而不是在构造阶段报错。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TomlFileFlags {
    path: PathBuf,
}

impl TomlFileFlags {
    /// 指向 `path` 的来源；构造时不访问文件系统。
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 文件路径。
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FlagSource for TomlFileFlags {
    fn read(&self, flag: &str) -> Result<Option<bool>, FlagError> {
        TomlFlags::from_path(&self.path)?.read(flag)
    }
}

/// 按优先级叠加的来源。
#[derive(Default)]
pub struct LayeredFlags {
    layers: Vec<Box<dyn FlagSource>>,
}

impl LayeredFlags {
    /// 空叠加，任何开关都返回 `Ok(None)`。
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一层，优先级低于已有各层。
    #[must_use]
    pub fn layer(mut self, source: impl FlagSource + 'static) -> Self {
        self.layers.push(Box::new(source));
        self
    }

    /// 层数。
    pub fn depth(&self) -> usize {
        self.layers.len()
    }
}

impl std::fmt::Debug for LayeredFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayeredFlags")
            .field("depth", &self.layers.len())
            .finish()
    }
}

impl FlagSource for LayeredFlags {
    fn read(&self, flag: &str) -> Result<Option<bool>, FlagError> {
        for layer in &self.layers {
            if let Some(value) = layer.read(flag)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parse_bool_accepts_words_and_digits() {
        assert!(parse_bool("f", "true").unwrap());
        assert!(parse_bool("f", " TRUE ").unwrap());
        assert!(parse_bool("f", "1").unwrap());
        assert!(!parse_bool("f", "false").unwrap());
        assert!(!parse_bool("f", "0").unwrap());
        assert!(matches!(
            parse_bool("f", "yes"),
            Err(FlagError::InvalidValue { ref flag, ref value }) if flag == "f" && value == "yes"
        ));
    }

    #[test]
    fn env_var_names_are_upper_snake_case() {
        let env = EnvFlags::default();
        assert_eq!(
            env.var_name("mutex_priority_inheritance"),
            "SPARK_AUDIO_FLAG_MUTEX_PRIORITY_INHERITANCE"
        );
        assert_eq!(EnvFlags::new("X_").var_name("a-b.c"), "X_A_B_C");
    }

    #[test]
    fn absent_env_var_has_no_opinion() {
        let env = EnvFlags::new("SPARK_AUDIO_FLAG_TEST_ONLY_UNSET_");
        assert_eq!(env.read("never_defined").unwrap(), None);
    }

    #[test]
    fn toml_document_reads_flags_table() {
        let flags = TomlFlags::from_toml_str(
            "[flags]\nmutex_priority_inheritance = true\nother = false\n\n[unrelated]\nx = 1\n",
        )
        .unwrap();
        assert_eq!(flags.len(), 2);
        assert_eq!(flags.read("mutex_priority_inheritance").unwrap(), Some(true));
        assert_eq!(flags.read("other").unwrap(), Some(false));
        assert_eq!(flags.read("missing").unwrap(), None);
        assert!(TomlFlags::from_toml_str("").unwrap().is_empty());
    }

    #[test]
    fn non_boolean_toml_value_is_rejected() {
        let err = TomlFlags::from_toml_str("[flags]\nmutex_priority_inheritance = \"yes\"\n")
            .unwrap_err();
        assert!(matches!(err, FlagError::Toml { ref origin, .. } if origin == "<inline>"));
    }

    #[test]
    fn toml_file_is_read_lazily() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let source = TomlFileFlags::new(file.path());
        assert_eq!(source.read("a").unwrap(), None);

        writeln!(file, "[flags]\na = true").unwrap();
        assert_eq!(source.read("a").unwrap(), Some(true));
    }

    #[test]
    fn missing_file_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = TomlFileFlags::new(&path).read("a").unwrap_err();
        match err {
            FlagError::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn first_layer_with_an_answer_wins() {
        let layered = LayeredFlags::new()
            .layer(FixedFlags::new().with("a", true))
            .layer(FixedFlags::new().with("a", false).with("b", false));
        assert_eq!(layered.depth(), 2);
        assert_eq!(layered.read("a").unwrap(), Some(true));
        assert_eq!(layered.read("b").unwrap(), Some(false));
        assert_eq!(layered.read("c").unwrap(), None);
    }

    #[test]
    fn layer_errors_stop_the_search() {
        let dir = tempfile::tempdir().unwrap();
        let layered = LayeredFlags::new()
            .layer(TomlFileFlags::new(dir.path().join("absent.toml")))
            .layer(FixedFlags::new().with("a", true));
        assert!(layered.read("a").is_err());

        let shadowed = LayeredFlags::new()
            .layer(FixedFlags::new().with("a", false))
            .layer(TomlFileFlags::new(dir.path().join("absent.toml")));
        assert_eq!(shadowed.read("a").unwrap(), Some(false));
    }
}

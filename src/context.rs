use std::path::{Path, PathBuf};

/// App module build file, relative to the project root
pub const ANDROID_APP_GRADLE: &str = "platforms/android/app/build.gradle";

/// What the hook runner tells us about the project being prepared
#[derive(Debug, Clone, PartialEq)]
pub struct BuildContext {
    pub root: PathBuf,
}

impl BuildContext {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<root>/platforms/android/app/build.gradle`
    pub fn gradle_path(&self) -> PathBuf {
        self.gradle_path_with(ANDROID_APP_GRADLE)
    }

    /// Join a `/`-separated relative path onto the root, one segment at a time
    /// so the result uses the platform separator.
    pub fn gradle_path_with(&self, relative: &str) -> PathBuf {
        relative
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradle_path_from_root() {
        let context = BuildContext::new("/proj");
        let expected: PathBuf = ["/proj", "platforms", "android", "app", "build.gradle"]
            .iter()
            .collect();
        assert_eq!(context.gradle_path(), expected);
    }

    #[cfg(unix)]
    #[test]
    fn test_gradle_path_exact_string() {
        let context = BuildContext::new("/proj");
        assert_eq!(
            context.gradle_path().to_str(),
            Some("/proj/platforms/android/app/build.gradle")
        );
    }

    #[test]
    fn test_gradle_path_with_custom_target() {
        let context = BuildContext::new("proj");
        let expected: PathBuf = ["proj", "android", "build.gradle"].iter().collect();
        assert_eq!(context.gradle_path_with("android//build.gradle"), expected);
    }
}

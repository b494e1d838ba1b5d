use std::path::PathBuf;

/// Router state. Plan synthesis is stateless; the only shared setting is
/// where the web form's static build lives, if anywhere.
#[derive(Clone, Default)]
pub struct AppState {
    pub app_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_app_dir(mut self, app_dir: PathBuf) -> Self {
        self.app_dir = Some(app_dir);
        self
    }
}

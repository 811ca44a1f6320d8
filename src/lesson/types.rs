use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, Debug)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Background colour of dialog surfaces.
    pub fn dialog_color(&self) -> &'static str {
        match self {
            ThemeMode::Light => "#ffffff",
            ThemeMode::Dark => "#2d2d30",
        }
    }

    pub fn as_class(&self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "theme-dark",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub const MIN_WIDTH: u32 = 480;
    pub const MIN_HEIGHT: u32 = 360;

    pub fn clamped(&self) -> Self {
        Self {
            width: self.width.max(Self::MIN_WIDTH),
            height: self.height.max(Self::MIN_HEIGHT),
        }
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 640,
            height: 560,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Default, Debug)]
#[serde(default)]
pub struct AppConfig {
    pub theme: ThemeMode,
    pub window: WindowSize,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Lesson {
    pub id: String,
    pub title: String,
}

impl Lesson {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Default, Debug)]
pub struct LessonStore {
    pub lessons: Vec<Lesson>,
}

impl LessonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes a lesson and returns it together with the position it held.
    pub fn remove(&mut self, id: &str) -> Option<(usize, Lesson)> {
        let index = self.lessons.iter().position(|l| l.id == id)?;
        Some((index, self.lessons.remove(index)))
    }

    /// Puts a removed lesson back where it was.
    pub fn restore(&mut self, index: usize, lesson: Lesson) {
        let index = index.min(self.lessons.len());
        self.lessons.insert(index, lesson);
    }
}

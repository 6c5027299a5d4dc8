/// Which radial guide lines accompany the foreground arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineMode {
    /// No lines.
    #[default]
    None,
    /// A line at the start of the arc.
    Start,
    /// A line at the end of the arc.
    End,
    /// Both lines, start first.
    Both,
}

impl LineMode {
    /// Maps a style-attribute ordinal (`0..=3`) to a mode.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::None),
            1 => Some(Self::Start),
            2 => Some(Self::End),
            3 => Some(Self::Both),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_index_covers_all_modes() {
        assert_eq!(LineMode::from_index(0), Some(LineMode::None));
        assert_eq!(LineMode::from_index(1), Some(LineMode::Start));
        assert_eq!(LineMode::from_index(2), Some(LineMode::End));
        assert_eq!(LineMode::from_index(3), Some(LineMode::Both));
        assert_eq!(LineMode::from_index(4), None);
    }
}

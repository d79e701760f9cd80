//! Single-selection state for a radial page.

/// Which node, if any, has its panel open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    /// The centre title node.
    Overview,
    Heading(usize),
}

/// User input the selection reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Click {
    Center,
    Heading(usize),
    Close,
}

impl Selection {
    /// Next state after `click` on a page with `count` heading nodes.
    /// Out-of-range heading clicks leave the state unchanged.
    pub fn after(self, click: Click, count: usize) -> Selection {
        match click {
            Click::Center => Selection::Overview,
            Click::Heading(i) if i < count => Selection::Heading(i),
            Click::Heading(_) => self,
            Click::Close => Selection::None,
        }
    }

    pub fn is_active(self, index: usize) -> bool {
        self == Selection::Heading(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(Selection::default(), Selection::None);
        assert!((0..6).all(|i| !Selection::default().is_active(i)));
    }

    #[test]
    fn every_click_replaces_the_state() {
        let states = [
            Selection::None,
            Selection::Overview,
            Selection::Heading(0),
            Selection::Heading(5),
        ];
        for s in states {
            assert_eq!(s.after(Click::Center, 6), Selection::Overview);
            assert_eq!(s.after(Click::Heading(2), 6), Selection::Heading(2));
            assert_eq!(s.after(Click::Close, 6), Selection::None);
        }
    }

    #[test]
    fn switching_headings_keeps_one_active() {
        let s = Selection::Heading(1).after(Click::Heading(4), 6);
        let active: Vec<usize> = (0..6).filter(|&i| s.is_active(i)).collect();
        assert_eq!(active, vec![4]);
    }

    #[test]
    fn out_of_range_heading_is_ignored() {
        assert_eq!(
            Selection::Overview.after(Click::Heading(6), 6),
            Selection::Overview
        );
        assert_eq!(Selection::None.after(Click::Heading(0), 0), Selection::None);
    }
}

//! Decoration composer.
//!
//! Decides which adornments a field shows and in what order. Two places can
//! hold decorations:
//!
//! - the leading **icon slot**, shown whenever an icon is configured
//! - the trailing **action cluster**, ordered left to right as
//!   error indicator, copy, reveal, caller actions
//!
//! Everything here is a pure function of the configured flags and the
//! current display mode.

use crate::state::reveal::DisplayMode;
use crate::types::ControlSize;

bitflags::bitflags! {
    /// What a field was configured with.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct DecorationFlags: u8 {
        const ICON = 1 << 0;
        /// Error text is present.
        const ERROR = 1 << 1;
        /// Copy action enabled.
        const COPY = 1 << 2;
        /// Field starts masked and can be revealed.
        const MASKABLE = 1 << 3;
        /// Caller supplied at least one action.
        const ACTIONS = 1 << 4;
    }
}

impl DecorationFlags {
    /// Flags that put an action cluster on the field. An icon alone does not.
    pub const CLUSTER_TRIGGERS: Self = Self::COPY.union(Self::ERROR).union(Self::ACTIONS);
}

/// An entry of the action cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decoration {
    ErrorIndicator,
    CopyAction,
    RevealAction,
    /// All caller actions, in the order supplied.
    CallerActions,
}

impl Decoration {
    /// Check if the user can press this entry.
    pub const fn is_pressable(self) -> bool {
        !matches!(self, Self::ErrorIndicator)
    }
}

/// Check if the configured flags call for an action cluster.
pub fn cluster_triggered(flags: DecorationFlags) -> bool {
    flags.intersects(DecorationFlags::CLUSTER_TRIGGERS)
}

/// Ordered entries of the action cluster.
///
/// Empty means no cluster is rendered. A pending reveal is listed even when
/// no trigger flag is set, so a masked field can always be revealed.
pub fn action_cluster(flags: DecorationFlags, mode: DisplayMode) -> Vec<Decoration> {
    let hidden = mode.is_hidden();
    let reveal_pending = flags.contains(DecorationFlags::MASKABLE) && hidden;

    if !cluster_triggered(flags) {
        return if reveal_pending {
            vec![Decoration::RevealAction]
        } else {
            Vec::new()
        };
    }

    let mut cluster = Vec::with_capacity(4);

    if flags.contains(DecorationFlags::ERROR) {
        cluster.push(Decoration::ErrorIndicator);
    }
    if flags.contains(DecorationFlags::COPY) && !hidden {
        cluster.push(Decoration::CopyAction);
    }
    if reveal_pending {
        cluster.push(Decoration::RevealAction);
    }
    if flags.contains(DecorationFlags::ACTIONS) {
        cluster.push(Decoration::CallerActions);
    }

    cluster
}

/// Check if the leading icon slot is shown.
pub fn icon_slot(flags: DecorationFlags) -> bool {
    flags.contains(DecorationFlags::ICON)
}

/// Styling shared by a control and every decoration around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecorationStyle {
    pub size: ControlSize,
    pub error: bool,
    pub with_icon: bool,
}

impl DecorationStyle {
    pub fn new(size: ControlSize, flags: DecorationFlags) -> Self {
        Self {
            size,
            error: flags.contains(DecorationFlags::ERROR),
            with_icon: icon_slot(flags),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use DecorationFlags as F;

    #[test]
    fn test_full_cluster_order() {
        let flags = F::ERROR | F::COPY | F::ACTIONS;
        assert_eq!(
            action_cluster(flags, DisplayMode::Revealed),
            vec![
                Decoration::ErrorIndicator,
                Decoration::CopyAction,
                Decoration::CallerActions,
            ]
        );
    }

    #[test]
    fn test_hidden_swaps_copy_for_reveal() {
        let flags = F::COPY | F::MASKABLE;
        assert_eq!(
            action_cluster(flags, DisplayMode::Hidden),
            vec![Decoration::RevealAction]
        );
        assert_eq!(
            action_cluster(flags, DisplayMode::Revealed),
            vec![Decoration::CopyAction]
        );
    }

    #[test]
    fn test_reveal_sits_between_copy_slot_and_actions() {
        let flags = F::ERROR | F::COPY | F::MASKABLE | F::ACTIONS;
        assert_eq!(
            action_cluster(flags, DisplayMode::Hidden),
            vec![
                Decoration::ErrorIndicator,
                Decoration::RevealAction,
                Decoration::CallerActions,
            ]
        );
    }

    #[test]
    fn test_icon_alone_has_no_cluster() {
        assert!(!cluster_triggered(F::ICON));
        assert!(action_cluster(F::ICON, DisplayMode::Revealed).is_empty());
        assert!(icon_slot(F::ICON));
    }

    #[test]
    fn test_maskable_only_still_offers_reveal() {
        assert!(!cluster_triggered(F::MASKABLE));
        assert_eq!(
            action_cluster(F::MASKABLE, DisplayMode::Hidden),
            vec![Decoration::RevealAction]
        );
        assert!(action_cluster(F::MASKABLE, DisplayMode::Revealed).is_empty());
    }

    #[test]
    fn test_untriggered_flags_give_no_cluster() {
        for flags in [F::empty(), F::ICON, F::MASKABLE, F::ICON | F::MASKABLE] {
            assert!(!cluster_triggered(flags));
            assert!(action_cluster(flags, DisplayMode::Revealed).is_empty());
        }
        assert_eq!(
            action_cluster(F::ICON | F::MASKABLE, DisplayMode::Hidden),
            vec![Decoration::RevealAction]
        );
    }

    #[test]
    fn test_triggers() {
        assert!(cluster_triggered(F::COPY));
        assert!(cluster_triggered(F::ERROR | F::ICON));
        assert!(cluster_triggered(F::ACTIONS));
        assert!(!cluster_triggered(F::empty()));
    }

    #[test]
    fn test_style_propagates_flags() {
        let style = DecorationStyle::new(ControlSize::Large, F::ERROR | F::ICON);
        assert_eq!(style.size, ControlSize::Large);
        assert!(style.error);
        assert!(style.with_icon);
        assert!(!Decoration::ErrorIndicator.is_pressable());
        assert!(Decoration::RevealAction.is_pressable());
    }
}

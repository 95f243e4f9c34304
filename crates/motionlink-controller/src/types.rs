/// Identifier of the peer that streams a controller.
pub type ControllerId = u32;

/// Which hand the physical device is held in. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handedness {
    Left,
    Right,
    Both,
}

impl Handedness {
    pub fn from_left_flag(is_left_handed: bool) -> Self {
        if is_left_handed {
            Self::Left
        } else {
            Self::Right
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Both => "both",
        }
    }
}

/// Controller identity passed to every listener.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerInfo {
    pub id: ControllerId,
    pub name: String,
    pub handedness: Handedness,
    pub skin: String,
}

impl ControllerInfo {
    pub fn new(
        id: ControllerId,
        name: impl Into<String>,
        handedness: Handedness,
        skin: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            handedness,
            skin: skin.into(),
        }
    }
}

/// Selects either one named control or every control of a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSelector<'a> {
    Name(&'a str),
    Any,
}

impl<'a> From<&'a str> for ControlSelector<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

/// Handle returned by every subscribe call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub(crate) fn next(counter: &mut u64) -> Self {
        *counter += 1;
        Self(*counter)
    }
}

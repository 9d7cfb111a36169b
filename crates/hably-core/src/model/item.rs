// Item model

use crate::model::state;

/// Item type tags as reported by the server.
///
/// `StringItem` stands in for the server's `String` type, which would
/// collide with the std type name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ItemType {
    #[default]
    None,
    Color,
    Contact,
    DateTime,
    Dimmer,
    Group,
    Image,
    Location,
    Number,
    Player,
    Rollershutter,
    StringItem,
    Switch,
}

impl ItemType {
    /// Parse a server-reported type token.
    ///
    /// Early OH2 servers append an `Item` suffix (`SwitchItem` for
    /// `Switch`), which is stripped first. Unknown or absent tokens map to
    /// [`None`](Self::None) rather than failing.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::None;
        };
        let token = raw.strip_suffix("Item").unwrap_or(raw);
        match token {
            "Color" => Self::Color,
            "Contact" => Self::Contact,
            "DateTime" => Self::DateTime,
            "Dimmer" => Self::Dimmer,
            "Group" => Self::Group,
            "Image" => Self::Image,
            "Location" => Self::Location,
            "Number" => Self::Number,
            "Player" => Self::Player,
            "Rollershutter" => Self::Rollershutter,
            "String" => Self::StringItem,
            "Switch" => Self::Switch,
            _ => Self::None,
        }
    }
}

/// A single home-automation data point with its current state.
///
/// The four derived state views are computed once at construction; an item
/// is immutable afterwards and replaced wholesale when a page is
/// re-fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    name: String,
    item_type: ItemType,
    group_type: Option<ItemType>,
    link: Option<String>,
    state: Option<String>,
    state_as_boolean: bool,
    state_as_float: f32,
    state_as_hsv: (f32, f32, f32),
    state_as_brightness: Option<i32>,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        item_type: ItemType,
        group_type: Option<ItemType>,
        link: Option<String>,
        state: Option<String>,
    ) -> Self {
        let raw = state.as_deref();
        let state_as_boolean = state::parse_boolean(raw);
        let state_as_float = state::parse_float(raw);
        let state_as_hsv = state::parse_hsv(raw);
        let state_as_brightness = state::parse_brightness(raw);
        Self {
            name: name.into(),
            item_type,
            group_type,
            link,
            state,
            state_as_boolean,
            state_as_float,
            state_as_hsv,
            state_as_brightness,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn item_type(&self) -> ItemType {
        self.item_type
    }

    pub fn group_type(&self) -> Option<ItemType> {
        self.group_type
    }

    /// The item's REST link, when the server reported one.
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    /// The raw state string; `None` when the item is uninitialized.
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn state_as_boolean(&self) -> bool {
        self.state_as_boolean
    }

    pub fn state_as_float(&self) -> f32 {
        self.state_as_float
    }

    pub fn state_as_hsv(&self) -> (f32, f32, f32) {
        self.state_as_hsv
    }

    pub fn state_as_brightness(&self) -> Option<i32> {
        self.state_as_brightness
    }

    /// Whether this item, or the group it aggregates, has the given type.
    /// Rendering treats a `Group` of switches like a switch.
    pub fn is_of_type_or_group_type(&self, item_type: ItemType) -> bool {
        self.item_type == item_type || self.group_type == Some(item_type)
    }
}

//! Typed identifiers for every key in the built-in catalogs.

macro_rules! keys {
    ($( $variant:ident => $path:literal $([$($ph:literal),+])? ),* $(,)?) => {
        /// A UI string known to the built-in catalogs.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Key {
            $($variant,)*
        }

        impl Key {
            pub const ALL: &'static [Key] = &[$(Key::$variant,)*];

            /// Dotted catalog path.
            pub fn path(self) -> &'static str {
                match self {
                    $(Key::$variant => $path,)*
                }
            }

            /// Placeholder names every locale's template must use.
            pub fn placeholders(self) -> &'static [&'static str] {
                match self {
                    $(Key::$variant => &[$($($ph),+)?],)*
                }
            }
        }
    };
}

keys! {
    LocaleZhCn => "zh_CN",
    LocaleEnUs => "en_US",
    LocaleJaJp => "ja_JP",
    DefaultText1 => "defaultText1",
    DefaultText2 => "defaultText2",
    ResetCamera => "resetCamera",
    Screenshot => "screenshot",
    CameraSettings => "cameraSettings",
    Font => "font",
    Perspective => "perspective" ["angle"],
    Text1 => "text1",
    Text2 => "text2",
    Front => "front",
    Back => "back",
    Left => "left",
    Right => "right",
    Up => "up",
    Down => "down",
    Outline => "outline",
    Mode => "mode",
    Color => "color",
    Gradient => "gradient",
    Image => "image",
    SelectColor => "selectColor" ["side"],
    SelectColorStart => "selectColorStart" ["side"],
    SelectColorEnd => "selectColorEnd" ["side"],
    Repeat => "repeat",
    Offset => "offset",
    Upload => "Upload",
    RepeatX => "repeatX",
    RepeatY => "repeatY",
    OffsetX => "offsetX",
    OffsetY => "offsetY",
    Presuppose => "presuppose",
    Customize => "customize",
    OutlineSize => "outlineSize",
    Thickness => "thickness",
    Spacing => "spacing",
    FontSize => "fontSize",
    UpDownRotate => "upDownRotate",
    UpDownPosition => "upDownPosition",
    Content => "content",
    Texture => "texture",
    FontSuccess => "fontSuccess",
    FontLoading => "fontLoading",
}

impl Key {
    pub fn from_path(path: &str) -> Option<Key> {
        Key::ALL.iter().copied().find(|k| k.path() == path)
    }
}

//! Built-in sample content and provider defaults. A fresh session renders a
//! working status card out of the box.

pub const STRUCTURED_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const DEFAULT_TOOL_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_CODING_MODEL: &str = "gemini-3-pro-preview";

/// Fixed choice list for the structured provider, which has no enumeration
/// endpoint worth calling.
pub const STRUCTURED_MODEL_CHOICES: &[(&str, &str)] = &[
    ("gemini-3-flash-preview", "Gemini 3 Flash Preview"),
    ("gemini-3-pro-preview", "Gemini 3 Pro Preview"),
];

pub const DEFAULT_CHAR_DATA: &str = r#"<CharData>
"Time": "Year 407, Day 12|Night|02:17",
"Location": "Silverpine Keep - West Tower",
"Character": "Mira",
"Class": "Warden",
"Age": "27",
"Level": "45 (Elite)",
"HP": "68/100 (bruised but steady)",
"MP": "40/100 (slowly recovering)",
"Equipment": "Oiled leather cloak, shortbow, twin daggers",
"Mood": "Wary, scanning the treeline",
"InnerVoice": "Too quiet tonight. Something is moving between the pines.",
"Tips": "Her arrows are fletched with owl feathers and fly almost silently."
</CharData>"#;

/// Sequential optional non-capturing groups, one per key. This shape depends
/// on the order of keys in the data block.
pub const DEFAULT_PATTERN: &str = r#"<CharData>(?:[\s\S]*?"Time":\s*"(?<Time>[^"]*)")?(?:[\s\S]*?"Location":\s*"(?<Location>[^"]*)")?(?:[\s\S]*?"Character":\s*"(?<Character>[^"]*)")?(?:[\s\S]*?"Class":\s*"(?<Class>[^"]*)")?(?:[\s\S]*?"Age":\s*"(?<Age>[^"]*)")?(?:[\s\S]*?"Level":\s*"(?<Level>[^"]*)")?(?:[\s\S]*?"HP":\s*"(?<HP>\d+)[^"]*")?(?:[\s\S]*?"MP":\s*"(?<MP>\d+)[^"]*")?(?:[\s\S]*?"Equipment":\s*"(?<Equipment>[^"]*)")?(?:[\s\S]*?"Mood":\s*"(?<Mood>[^"]*)")?(?:[\s\S]*?"InnerVoice":\s*"(?<InnerVoice>[^"]*)")?(?:[\s\S]*?"Tips":\s*"(?<Tips>[^"]*)")?[\s\S]*?</CharData>"#;

pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
</head>
<body style="margin:0; padding:0; background:transparent; width: 100%; box-sizing: border-box;">
    <div style="font-family: 'Segoe UI', Roboto, sans-serif; background: linear-gradient(145deg, #151a1e, #20262b); color: #e0e0e0; padding: 20px; border-radius: 12px; border: 1px solid #333; width: 100%; max-width: 350px; box-sizing: border-box; box-shadow: 0 8px 32px rgba(0,0,0,0.8); position: relative; overflow: hidden;">
        <div style="position: absolute; top: 0; left: 0; width: 4px; height: 100%; background: #4db6ac;"></div>

        <div style="display: flex; justify-content: space-between; font-size: 0.75em; color: #888; margin-bottom: 8px; padding-bottom: 8px; border-bottom: 1px dashed rgba(255,255,255,0.1);">
            <div>🗓️ $<Time></div>
            <div>🌏 $<Location></div>
        </div>

        <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 15px; border-bottom: 1px solid rgba(255,255,255,0.1); padding-bottom: 10px;">
            <div style="font-size: 1.4em; font-weight: 900; color: #fff; letter-spacing: 1px;">$<Character></div>
            <div style="background: #4db6ac; color: #10211f; padding: 2px 12px; border-radius: 4px; font-size: 0.8em; font-weight: bold;">LV. $<Level></div>
        </div>

        <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 8px; font-size: 0.85em; margin-bottom: 15px;">
            <div style="grid-column: span 2; color: #aaa;">🛡️ $<Class></div>
            <div style="grid-column: span 2; color: #aaa;">🌿 $<Age></div>
            <div style="grid-column: span 2; border-top: 1px solid #333; padding-top: 5px; margin-top: 5px; color: #64b5f6;">🎒 $<Equipment></div>
            <div style="grid-column: span 2; color: #81c784;">💭 $<Mood></div>
        </div>

        <div style="margin-bottom: 10px;">
            <div style="display: flex; justify-content: space-between; font-size: 0.7em; margin-bottom: 4px; color: #e57373;">
                <span>❤️ HP</span>
                <span>$<HP>%</span>
            </div>
            <div style="height: 6px; background: #111; border-radius: 3px;">
                <div style="width: $<HP>%; height: 100%; background: #e57373; box-shadow: 0 0 8px rgba(229,115,115,0.6);"></div>
            </div>
        </div>

        <div style="margin-bottom: 15px;">
            <div style="display: flex; justify-content: space-between; font-size: 0.7em; margin-bottom: 4px; color: #64b5f6;">
                <span>🔮 MP</span>
                <span>$<MP>%</span>
            </div>
            <div style="height: 6px; background: #111; border-radius: 3px;">
                <div style="width: $<MP>%; height: 100%; background: #64b5f6; box-shadow: 0 0 8px rgba(100,181,246,0.6);"></div>
            </div>
        </div>

        <div style="background: rgba(0,0,0,0.3); padding: 10px; border-radius: 6px; font-size: 0.85em; border-left: 2px solid #4db6ac; margin-bottom: 10px;">
            <div style="color: #4db6ac; font-size: 0.7em; font-weight: bold; margin-bottom: 3px;">🤔 Inner Voice</div>
            <div style="font-style: italic; color: #ccc;">"$<InnerVoice>"</div>
        </div>

        <div style="font-size: 0.7em; color: #777; border-top: 1px dashed rgba(255,255,255,0.1); padding-top: 8px;">
            💡 $<Tips>
        </div>
    </div>
</body>
</html>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;

    #[test]
    fn test_defaults_render_cleanly() {
        let outcome = render(DEFAULT_PATTERN, DEFAULT_CHAR_DATA, DEFAULT_TEMPLATE);
        assert!(outcome.is_ok(), "default inputs must render: {:?}", outcome.error);
        assert_eq!(outcome.variables["Character"], "Mira");
        assert_eq!(outcome.variables["Level"], "45 (Elite)");
        assert_eq!(outcome.variables["HP"], "68");
        assert!(outcome.html.contains("LV. 45 (Elite)"));
        assert!(!outcome.html.contains("$<Character>"));
    }
}

//! Prompt text for the four pipeline operations, carried over from the
//! original prompt-engineering content. Templates use `{name}` slots filled
//! by `PromptBuilder`.

/// Character data is truncated to this many characters before it is embedded
/// in the generate-template prompt.
pub const MAX_DATA_CHARS: usize = 5000;

pub const HTML_FORMAT_INSTRUCTIONS: &str = r##"
    STRICT HTML FORMATTING RULES:
    1. Output RAW HTML. No markdown code blocks.
    2. Start with `<!DOCTYPE html>`
    3. Root: `<html lang="zh-CN">`
    4. Head must contain:
       `<meta charset="UTF-8">`
       `<meta name="viewport" content="width=device-width, initial-scale=1.0">`
    5. Body: `<body style="margin:0; padding:0; background:transparent; width: 100%; box-sizing: border-box;">`
    6. Content: All visual content MUST be inside a single main wrapper `div`.
       - **CRITICAL**: The main wrapper MUST have `width: 100%`, `box-sizing: border-box`. It MUST be responsive and adapt to the parent container's width.
       - Apply all styling inline.
    7. End with `</body></html>`
"##;

pub const VISUAL_STYLE_INSTRUCTIONS: &str = r##"
    VISUAL STYLE GUIDE & BEST PRACTICES:
    1.  **Aesthetics**: Aim for a high-quality "Game HUD" look (Cyberpunk, Sci-Fi, or Elegant Fantasy).
    2.  **Container**:
        - Use **Linear Gradients** for backgrounds to create depth (e.g., `linear-gradient(145deg, #1b151e, #2b2026)`).
        - Add subtle borders (e.g., `1px solid rgba(255,255,255,0.1)`).
        - Use **Rounded Corners** (8px-16px).
        - Add **Drop Shadows** (`box-shadow: 0 8px 32px rgba(0,0,0,0.6)`) for a floating effect.
    3.  **Color & Logic**:
        - **Infer Colors from Data**: Analyze the key/value to pick colors.
          - *Health / Favorability / Love*: Pink (#e91e63), Red.
          - *Mana / Logic / Tech*: Blue (#64b5f6), Cyan (#4db6ac).
          - *Stamina / Nature*: Green (#81c784).
          - *Corruption / Dark*: Purple (#ba68c8), Deep Red.
        - Use **Translucent** backgrounds for inner sections (`rgba(0,0,0,0.2)`).
    4.  **Effects**:
        - Use **Glow** effects for important elements (`box-shadow: 0 0 10px rgba(...)` or `text-shadow`).
        - Progress Bars: If a value is a number/percentage, render a stylish progress bar with a glow.
    5.  **Layout**:
        - Use Flexbox for headers.
        - Use Grid for attribute lists.
        - Ensure good contrast for text.
"##;

pub const CONVERT_PROMPT_TEMPLATE: &str = r##"
    Convert this text to "World Info" JSON format.

    RAW TEXT:
    {raw_text}

    OUTPUT FORMAT:
    <CharData>
    "Key1": "Value1",
    "Key2": "Value2"
    </CharData>

    RULES:
    1. Start with <CharData>, end with </CharData>.
    2. Use exact keys from text if possible. **DO NOT omit any fields** found in the RAW TEXT.
    3. **QUOTES (IMPORTANT)**:
       - **STRUCTURE**: You MUST use English ASCII double quotes (") to enclose the Keys and Values (e.g., "Key": "Value").
       - **CONTENT PRESERVATION**: If the content text *inside* the value itself contains Chinese quotes (such as “ or ”), you MUST **PRESERVE** them as Chinese quotes.
       - **STRICTLY FORBIDDEN**: Do NOT convert Chinese quotes found in the *original text content* into English quotes. Keep them exactly as they appear in the source.
         - Incorrect: "Thoughts": "He said "Hello"."
         - Correct:   "Thoughts": "He said “Hello”."
    4. Separator must be a colon (:).
    5. **CRITICAL**: Preserve all emojis, special characters, and decorative symbols found in the keys or values. Do not strip them.
    6. **NO NEWLINES IN VALUES**: The value string MUST be on a single line. Do not use \n inside the value string as it breaks downstream parsing.
    7. **HTML STRUCTURE**: If a value requires multiple lines or structure, use <div>...</div> or <br> tags within the string instead of newlines. Use single quotes for attributes inside these tags (e.g. <div style='color:red'>).
    8. Return ONLY the result string. No markdown.
"##;

pub const GENERATE_PROMPT_TEMPLATE: &str = r##"
    Analyze this raw text character data.
    DATA START:
    {char_data}
    DATA END.

    GOAL: Create a Regex to extract data and an HTML template to display it.

    STEP 1: ANALYZE DATA FORMAT & SEMANTICS
    - Identify Keys (e.g. "时间", "Name") and Values.
    - **COLOR INFERENCE**: Look at the CONTENT of the values and the meaning of keys.
      - Example: If "Clothing" describes "dark leather", suggest dark themes.
      - Example: If "HP" is present, suggest Red/Green.

    STEP 2: GENERATE REGEX
    Create a Regular Expression string to capture all fields.

    CRITICAL SYNTAX RULES:
    1.  **WRAPPER**: The regex string MUST start with `<CharData>` and end with `[\s\S]*?<\/CharData>`.
    2.  **STRUCTURE**:
        `<CharData>(?:...)?(?:...)?...[\s\S]*?<\/CharData>`
    3.  **FIELD PATTERN**: For EACH key, use this specific non-capturing group pattern:
        `(?:[\s\S]*?KEY_LITERAL[\s]*SEPARATOR[\s]*VALUE_PATTERN)?`
    4.  **KEY LITERAL**: Use the EXACT key from data (including quotes if present).
    5.  **VALUE PATTERN**:
        - Standard quotes: `"(?<GroupName>[^"]*)"`
        - Chinese quotes: `“(?<GroupName>[^”]*)”`
        - Unquoted value: `(?<GroupName>[^\n<]*)`
    6.  **NAMING**: Use the key text as Group Name. Use Chinese characters if needed.

    STEP 3: GENERATE HTML
    Create a modern HUD HTML/CSS template based on the analysis.

    {format_rules}

    {style_rules}

    SPECIFIC RULES:
    1.  **PLACEHOLDERS**: Use `$<GroupName>`.
    2.  **LABELS**: Display the Group Name/Key.
    3.  **ICONS/EMOJIS**: **MANDATORY**. Add relevant icons next to labels based on their meaning (e.g. 🗓️ for Date, 👗 for Clothing).
    4.  **TABBED LAYOUT**: If extracted fields > 7, split them into TABS (Overview, Stats, Details) using simple inline JS.
    5.  **LAYOUT**:
        - Put "Name/Role" and "Level" in a prominent Header.
        - Put "Time/Location" in a smaller top bar or footer.
        - Use Progress Bars for numeric fields (e.g. 40/100).

    Return JSON format:
    {
      "regex": "escaped string of the regex",
      "html": "string of the html"
    }
"##;

pub const MODIFY_PROMPT_TEMPLATE: &str = r##"
    You are an expert Frontend Developer.

    USER INSTRUCTION: "{instruction}"

    CURRENT HTML:
    ```html
    {current_html}
    ```

    {style_rules}

    TASK:
    1. Apply changes based on the instruction.
    2. {format_rules}
    3. KEEP all placeholders (like `$<Name>`) intact.
    4. Maintain the high-quality visual style (Gradients, Glows, Glassmorphism).
    5. Return ONLY the raw HTML string.
"##;

pub const INSPIRATION_PROMPT_TEMPLATE: &str = r##"
    You are an expert HTML/CSS designer for game UIs.
    Create a "Character Status Bar" (HUD) HTML template.

    {format_rules}

    {style_rules}

    DESIGN REQUIREMENTS:
    1. Create a visually striking floating card/HUD.
    2. Use inline styles for EVERYTHING. No <style> blocks.
    3. You MUST use the following placeholder variables: {keys_list}.
       - **CRITICAL**: The format MUST be `$<VariableName>`.
    4. **LABELS & ICONS**:
       - Display variable names as labels.
       - **MANDATORY**: Add a relevant EMOJI or ICON next to every label (e.g. ❤️ for HP).
    5. **RESPONSIVENESS**: The design MUST be flexible (width: 100%).
    6. **TABBED LAYOUT**: If there are many variables (e.g. > 7), you MUST organize them into **Tabs** (e.g., "Overview", "Stats", "Info") to keep the height manageable. Use simple inline JavaScript (`onclick`) to toggle tab visibility.
    7. Return ONLY the raw HTML string.
"##;

/// Fills the prompt templates for each pipeline operation.
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn build_convert_prompt(raw_text: &str) -> String {
        CONVERT_PROMPT_TEMPLATE.replace("{raw_text}", raw_text)
    }

    pub fn build_generate_prompt(char_data: &str) -> String {
        GENERATE_PROMPT_TEMPLATE
            .replace("{char_data}", truncate_chars(char_data, MAX_DATA_CHARS))
            .replace("{format_rules}", HTML_FORMAT_INSTRUCTIONS)
            .replace("{style_rules}", VISUAL_STYLE_INSTRUCTIONS)
    }

    pub fn build_modify_prompt(current_html: &str, instruction: &str) -> String {
        MODIFY_PROMPT_TEMPLATE
            .replace("{instruction}", instruction)
            .replace("{current_html}", current_html)
            .replace("{format_rules}", HTML_FORMAT_INSTRUCTIONS)
            .replace("{style_rules}", VISUAL_STYLE_INSTRUCTIONS)
    }

    pub fn build_inspiration_prompt(keys: &[String]) -> String {
        let keys_list = keys
            .iter()
            .map(|key| format!("$<{}>", key))
            .collect::<Vec<_>>()
            .join(", ");
        INSPIRATION_PROMPT_TEMPLATE
            .replace("{keys_list}", &keys_list)
            .replace("{format_rules}", HTML_FORMAT_INSTRUCTIONS)
            .replace("{style_rules}", VISUAL_STYLE_INSTRUCTIONS)
    }
}

/// Cuts `text` at a char boundary after at most `max` characters.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

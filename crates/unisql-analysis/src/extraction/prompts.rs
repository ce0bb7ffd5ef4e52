//! Prompt templates sent to the text generation service.

use serde::Serialize;
use serde_json::Value;

/// The first `max_chars` characters of `code`, never splitting a code point.
pub fn truncate_chars(code: &str, max_chars: usize) -> &str {
    match code.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &code[..byte_idx],
        None => code,
    }
}

/// Instruction asking for a script's inputs, outputs, and related tables.
pub fn extraction_prompt(code: &str) -> String {
    format!(
        r#"Extract the data inputs and outputs of this Python script:

```python
{code}
```

Return JSON:
{{
    "inputs": [{{"source": "table", "columns": ["col1"]}}, ...],
    "outputs": [{{"destination": "table", "operation": "INSERT/UPDATE"}}, ...],
    "combinable_with": ["table1", "table2"]
}}
"#
    )
}

/// Projection of one script embedded in the synthesis prompt. Entries are
/// passed through as the model returned them.
#[derive(Debug, Serialize)]
pub struct ScriptEffects<'a> {
    pub name: &'a str,
    pub inputs: &'a [Value],
    pub outputs: &'a [Value],
}

/// Instruction asking for one SQL statement that reconciles every listed
/// script's effects on `table`.
pub fn synthesis_prompt(table: &str, scripts: &[ScriptEffects<'_>]) -> String {
    // Serializing borrowed strings and plain structs cannot fail.
    let effects = serde_json::to_string_pretty(scripts).unwrap_or_else(|_| "[]".to_string());
    format!(
        r#"Generate unified SQL that combines these scripts, which all modify the table {table}:

{effects}

Return only the SQL:
```sql
-- SQL here
```
"#
    )
}

use serde::Serialize;

/// Render a Liquid template against any serializable context
pub fn render<C: Serialize>(template: &str, context: &C) -> anyhow::Result<String> {
    let template = liquid::ParserBuilder::with_stdlib()
        .build()?
        .parse(template)
        .map_err(|e| anyhow!("Unable to parse template: {}", e))?;

    let globals = liquid::to_object(context)?;

    Ok(template.render(&globals)?)
}

/// Demonstrates the embed builder API.
///
/// This example shows how to assemble a Discord embed using the fluent
/// builders, including field list manipulation, nested author/footer blocks,
/// and the validation policy.
use discord_embed::builders::{AuthorInput, FieldInput};
use discord_embed::{EmbedBuilder, EmbedField, Validation, ValidationError};

fn main() -> Result<(), ValidationError> {
    println!("=== Discord Embed Builder Demo ===\n");

    // Example 1: A release announcement embed
    println!("1. Building a release announcement:");

    let mut embed = EmbedBuilder::new();
    embed
        .title("v2.4.0 released")
        .url("https://example.com/releases/v2.4.0")
        .color(0x5865F2)
        .timestamp_now();
    embed.author(AuthorInput::edit(|mut author| {
        author
            .name("release-bot")
            .icon_url("https://cdn.example.com/bot.png");
        author
    }));
    embed.footer_mut().text("release pipeline");
    embed.add_fields([
        FieldInput::from(EmbedField {
            name: Some("Commits".to_string()),
            value: Some("37".to_string()),
            inline: Some(true),
        }),
        FieldInput::edit(|mut field| {
            field.name("Artifacts").value("4").inline(true);
            field
        }),
    ]);

    let payload = embed.build()?;
    println!("   Fields: {}", payload.fields.as_deref().unwrap_or_default().len());
    println!("   JSON: {}\n", serde_json::to_string_pretty(&payload).unwrap());

    // Example 2: Reordering fields with splice semantics
    println!("2. Replacing the last field in place:");

    embed.splice_fields(
        -1,
        1,
        [FieldInput::edit(|mut field| {
            field.name("Artifacts").value("5").inline(true);
            field
        })],
    );
    let payload = embed.build()?;
    println!(
        "   Last field value: {:?}\n",
        payload.fields.as_deref().unwrap_or_default()[1].value
    );

    // Example 3: Validation catches schema violations before transmission
    println!("3. Validation report for a broken embed:");

    let mut broken = EmbedBuilder::new();
    broken.title("").url("not a url");
    match broken.build_with(Validation::Enabled) {
        Ok(_) => unreachable!("the embed is invalid"),
        Err(error) => println!("   {error}"),
    }

    // The same state serializes when validation is explicitly skipped.
    let unchecked = broken.build_with(Validation::Disabled)?;
    println!(
        "   Unchecked payload still serializes: {}",
        serde_json::to_string(&unchecked).unwrap()
    );

    Ok(())
}

//! Categories command

use anyhow::Result;

use super::get_context;
use crate::output::create_table;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let categories = ctx.store().categories();

    if json {
        println!("{}", serde_json::to_string_pretty(categories)?);
        return Ok(());
    }

    let mut table = create_table();
    table.set_header(vec!["ID", "Name", "Works"]);
    for category in categories {
        let count = ctx.store().filter_works_by_category(&category.name).len();
        table.add_row(vec![
            category.id.to_string(),
            category.name.clone(),
            count.to_string(),
        ]);
    }
    println!("{}", table);

    Ok(())
}

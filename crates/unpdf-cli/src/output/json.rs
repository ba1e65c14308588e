use serde::Serialize;
use unpdf_core::element::Element;
use unpdf_core::error::UnpdfError;

#[derive(Serialize)]
struct ElementsBody<'a> {
    elements: &'a [Element],
}

pub fn print(elements: &[Element]) -> Result<(), UnpdfError> {
    let json = serde_json::to_string_pretty(&ElementsBody { elements })?;
    println!("{json}");
    Ok(())
}

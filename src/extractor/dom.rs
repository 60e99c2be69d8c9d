//! Text-node lookups over a row, mirroring the structural queries the page needs:
//! "first text directly inside a cell", "first text after a `<br>`", "anchor text".

use scraper::{ElementRef, Selector};

/// First text node that is a direct child of `element`.
pub fn first_text_child<'a>(element: ElementRef<'a>) -> Option<&'a str> {
    element
        .children()
        .find_map(|node| node.value().as_text().map(|text| &**text))
}

/// First direct text child of `element` that has a `<br>` among its preceding siblings.
pub fn first_text_after_break<'a>(element: ElementRef<'a>) -> Option<&'a str> {
    element
        .children()
        .skip_while(|node| {
            !node
                .value()
                .as_element()
                .is_some_and(|el| el.name() == "br")
        })
        .find_map(|node| node.value().as_text().map(|text| &**text))
}

/// First direct text child across every `cells` match under `scope`, in document order.
pub fn first_text_in<'a>(scope: ElementRef<'a>, cells: &Selector) -> Option<&'a str> {
    scope.select(cells).find_map(first_text_child)
}

/// Same as [`first_text_in`] but only counting text that follows a `<br>`.
pub fn first_text_after_break_in<'a>(scope: ElementRef<'a>, cells: &Selector) -> Option<&'a str> {
    scope.select(cells).find_map(first_text_after_break)
}

/// All text under `element`, concatenated and trimmed.
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

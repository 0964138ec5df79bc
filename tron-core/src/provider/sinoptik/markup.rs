//! Extraction of forecast columns and directory entries from sinoptik.bg pages.

use scraper::{ElementRef, Html, Selector};

use crate::{error::ProviderError, model::Location};

const PROBABILITY_LABEL: &str = "Вероятност за валежи:";
const INTENSITY_LABEL: &str = "Количество валежи:";

/// The three value columns of an hourly page, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HourlyColumns {
    pub temperature: Vec<String>,
    pub probability: Vec<String>,
    pub intensity: Vec<String>,
}

pub fn parse_hourly(page: &str) -> Result<HourlyColumns, ProviderError> {
    let doc = Html::parse_document(page);
    let temperature_sel = selector(r#"span[class*="max-temp"]"#)?;
    let paragraph_sel = selector("p")?;

    let temperature = doc.select(&temperature_sel).filter_map(own_text).collect();

    let mut probability = Vec::new();
    let mut intensity = Vec::new();
    for p in doc.select(&paragraph_sel) {
        let Some(lead) = first_text(p) else { continue };
        if lead.starts_with(PROBABILITY_LABEL) {
            probability.extend(bold_values(p));
        } else if lead.starts_with(INTENSITY_LABEL) {
            intensity.extend(bold_values(p));
        }
    }

    Ok(HourlyColumns { temperature, probability, intensity })
}

/// Directory entries of one letter page, as `(name, id)` where the id is the
/// last path segment of the entry's link.
pub fn parse_locations(page: &str) -> Result<Vec<Location>, ProviderError> {
    let doc = Html::parse_fragment(page);
    let anchor_sel = selector(r#"div[class*="worldContent"] > div > ul > li > a"#)?;

    let locations = doc
        .select(&anchor_sel)
        .filter_map(|a| {
            let href = a.value().attr("href")?;
            let id = href.trim_end_matches('/').rsplit('/').next()?.trim();
            let name = a.text().collect::<String>();
            let name = name.trim();
            if id.is_empty() || name.is_empty() {
                return None;
            }
            Some(Location::new(name, id))
        })
        .collect();

    Ok(locations)
}

fn selector(css: &str) -> Result<Selector, ProviderError> {
    Selector::parse(css).map_err(|e| ProviderError::Selector(format!("{css}: {e}")))
}

/// Direct text of an element, trimmed; `None` if it has none.
fn own_text(el: ElementRef<'_>) -> Option<String> {
    let text: String = el.children().filter_map(|n| n.value().as_text()).map(|t| &**t).collect();
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn first_text(el: ElementRef<'_>) -> Option<&str> {
    el.children().find_map(|n| n.value().as_text()).map(|t| t.trim_start())
}

fn bold_values(p: ElementRef<'_>) -> impl Iterator<Item = String> + '_ {
    p.children()
        .filter_map(ElementRef::wrap)
        .filter(|c| c.value().name() == "b")
        .filter_map(own_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOURLY: &str = r#"
        <html><body>
          <div class="hour">
            <span class="time">18:00</span>
            <span class="temp max-temp">2°</span>
            <p>Вероятност за валежи: <b>17%</b></p>
            <p>Количество валежи: <b>0.0 mm</b></p>
          </div>
          <div class="hour">
            <span class="time">19:00</span>
            <span class="temp max-temp"> 1° </span>
            <p>Вероятност за валежи: <b>20%</b></p>
            <p>Количество валежи: <b>0.3 mm</b></p>
            <p>Вятър: <b>3 m/s</b></p>
          </div>
        </body></html>
    "#;

    #[test]
    fn extracts_aligned_columns() {
        let columns = parse_hourly(HOURLY).expect("parse");

        assert_eq!(columns.temperature, ["2°", "1°"]);
        assert_eq!(columns.probability, ["17%", "20%"]);
        assert_eq!(columns.intensity, ["0.0 mm", "0.3 mm"]);
    }

    #[test]
    fn unrelated_markup_yields_empty_columns() {
        let columns = parse_hourly("<html><body><p>Нищо</p></body></html>").expect("parse");
        assert_eq!(columns, HourlyColumns::default());
    }

    #[test]
    fn extracts_directory_entries() {
        let page = r#"
            <div class="worldContent">
              <div class="worldCol">
                <ul>
                  <li><a href="http://sinoptik.bg/avren-bulgaria-100733587">
                      Аврен</a></li>
                  <li><a href="http://sinoptik.bg/aytos-bulgaria-100733579">Айтос</a></li>
                  <li><a>Без връзка</a></li>
                </ul>
              </div>
            </div>
            <ul><li><a href="http://sinoptik.bg/elsewhere-1">Извън списъка</a></li></ul>
        "#;

        let locations = parse_locations(page).expect("parse");
        assert_eq!(
            locations,
            vec![
                Location::new("Аврен", "avren-bulgaria-100733587"),
                Location::new("Айтос", "aytos-bulgaria-100733579"),
            ]
        );
    }
}

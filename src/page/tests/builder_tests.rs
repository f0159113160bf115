use crate::page::builder::{Figure, PageBuilder};
use crate::page::manifest::Hero;
use crate::page::style::Layout;

fn hero() -> Hero {
    Hero {
        title: "AI Universal Studio PRO++".to_string(),
        title_color: "#4B7BE5".to_string(),
        subtitle: Some("Sistema Multimodal".to_string()),
        subtitle_color: "#FF5B6A".to_string(),
        tagline: None,
    }
}

#[test]
fn test_document_shell() {
    let page = PageBuilder::new("Studio <PRO>", Layout::Wide, "pt-BR");
    let html = page.finish().unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<html lang=\"pt-BR\">"));
    assert!(html.contains("<title>Studio &lt;PRO&gt;</title>"));
    assert!(html.contains("font-family: 'Poppins', sans-serif;"));
    assert!(html.contains("<main class=\"layout-wide\">"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_hero_is_centred_and_coloured() {
    let mut page = PageBuilder::new("t", Layout::Centered, "pt-BR");
    page.hero(&hero()).unwrap();
    let html = page.finish().unwrap();

    assert!(html.contains("<h1 class=\"centered\" style=\"color:#4B7BE5;\">AI Universal Studio PRO++</h1>"));
    assert!(html.contains("<h4 class=\"centered\" style=\"color:#FF5B6A;\">Sistema Multimodal</h4>"));
    assert!(!html.contains("<p class=\"centered\""));
}

#[test]
fn test_section_heading_escapes_text() {
    let mut page = PageBuilder::new("t", Layout::Centered, "pt-BR");
    page.section_heading("O que é <isto>?", "#6C63FF").unwrap();
    let html = page.finish().unwrap();

    assert!(html.contains("<h2><span style=\"color:#6C63FF;\">O que é &lt;isto&gt;?</span></h2>"));
}

#[test]
fn test_markdown_is_inserted_unescaped() {
    let mut page = PageBuilder::new("t", Layout::Centered, "pt-BR");
    page.markdown("**forte**").unwrap();
    let html = page.finish().unwrap();

    assert!(html.contains("<div class=\"markdown\"><p><strong>forte</strong></p>\n</div>"));
}

#[test]
fn test_columns_with_missing_slot() {
    let mut page = PageBuilder::new("t", Layout::Wide, "pt-BR");
    page.columns(&[
        Some(Figure { src: "images/01_train.png".to_string(), caption: "Etapa 1".to_string() }),
        None,
        Some(Figure { src: "images/03_predict.png".to_string(), caption: String::new() }),
    ])
    .unwrap();
    let html = page.finish().unwrap();

    assert!(html.contains("<div class=\"columns\">"));
    assert!(html.contains("src=\"images/01_train.png\""));
    assert!(html.contains("<figcaption>Etapa 1</figcaption>"));
    assert!(html.contains("<div class=\"column\"></div>"));
    assert!(html.contains("src=\"images/03_predict.png\""));
    assert_eq!(html.matches("<figcaption>").count(), 1);
}

#[test]
fn test_notice_and_caption() {
    let mut page = PageBuilder::new("t", Layout::Wide, "pt-BR");
    page.notice("Imagem não encontrada: a.png").unwrap()
        .caption("© 2025").unwrap();
    let html = page.finish().unwrap();

    assert!(html.contains("<div class=\"notice\" role=\"alert\">Imagem não encontrada: a.png</div>"));
    assert!(html.contains("<p class=\"caption\">© 2025</p>"));
}

//! End-to-end navigation over the real document.

use roteiro_core::{NavUiState, Session};
use roteiro_pages::document;

#[test]
fn every_page_resolves_and_highlights_itself() {
    let site = document().unwrap();
    for entry in site.table().iter() {
        let page = site.view(&entry.path, &NavUiState::default());
        assert_eq!(
            page.navbar.active_paths(),
            vec![entry.path.as_str()],
            "wrong highlight for {}",
            entry.path
        );
        assert!(page.pager.is_some());
    }
}

#[test]
fn mensageria_highlights_and_pages_to_its_neighbors() {
    let site = document().unwrap();
    let page = site.view("/mensageria", &NavUiState::default());

    let active: Vec<&str> = page
        .navbar
        .condensed
        .iter()
        .filter(|l| l.active)
        .map(|l| l.label.as_str())
        .collect();
    assert_eq!(active, vec!["Mensageria"]);

    let pager = page.pager.unwrap();
    assert_eq!(pager.previous.unwrap().to, "/observabilidade");
    assert_eq!(pager.next.unwrap().to, "/resiliencia");
}

#[test]
fn condensed_strip_shows_first_six_pages_of_the_document() {
    let site = document().unwrap();
    let page = site.view("/conclusao", &NavUiState::default());
    let labels: Vec<&str> = page
        .navbar
        .condensed
        .iter()
        .map(|l| l.label.as_str())
        .collect();
    assert_eq!(
        labels,
        vec![
            "Introdução",
            "Visão Geral",
            "Estrutura",
            "Observabilidade",
            "Mensageria",
            "Resiliência"
        ]
    );
}

#[test]
fn first_and_last_pages_miss_one_pager_side() {
    let site = document().unwrap();

    let home = site.view("/", &NavUiState::default()).pager.unwrap();
    assert!(home.previous.is_none());
    assert_eq!(home.next.unwrap().to, "/visao-geral-arquitetura");

    let last = site.view("/conclusao", &NavUiState::default()).pager.unwrap();
    assert_eq!(last.previous.unwrap().to, "/como-contribuir");
    assert!(last.next.is_none());
}

#[test]
fn expanded_menu_collapses_when_a_link_is_followed() {
    let site = document().unwrap();
    let mut session = Session::new("/");
    session.toggle_menu();

    let page = site.view(session.current_path(), session.nav());
    let panel = page.navbar.panel.expect("expanded bar projects the panel");
    assert_eq!(panel.len(), 12);

    session.follow("/seguranca");
    let page = site.view(session.current_path(), session.nav());
    assert!(page.navbar.panel.is_none());
    assert_eq!(page.navbar.active_paths(), vec!["/seguranca"]);
}

#[test]
fn unknown_location_falls_back_to_not_found() {
    let site = document().unwrap();
    let page = site.view("/deploy/", &NavUiState::default());
    assert!(page.pager.is_none());
    assert!(page.navbar.active_paths().is_empty());
    let links = page.body.links();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].to, "/");
}

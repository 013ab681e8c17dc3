//! Static content of the pagamento-system documentation.
//!
//! One module per page, each exposing a single `page()` builder that
//! returns the page's body as a view tree. Route ids, the table order and
//! every text come from the published site; this crate holds data only,
//! all navigation behavior lives in `roteiro-core`.

mod como_contribuir;
mod conclusao;
mod deploy;
mod estrutura;
mod extensibilidade;
mod home;
mod mensageria;
mod observabilidade;
mod resiliencia;
mod seguranca;
mod testes;
mod visao_geral;

use roteiro_api::{LinkView, RouteEntry, RouteTable, RouteTableError, ViewNode};
use roteiro_core::{PageSource, Site};

/// The document's Route Table: twelve pages, in reading order.
///
/// Order is meaningful: it drives both the navigation bar menu and the
/// previous/next pager.
pub fn routes() -> Result<RouteTable, RouteTableError> {
    RouteTable::new(vec![
        RouteEntry::new("home", "Introdução", "/"),
        RouteEntry::new(
            "visao-geral-arquitetura",
            "Visão Geral",
            "/visao-geral-arquitetura",
        ),
        RouteEntry::new("estrutura-projeto", "Estrutura", "/estrutura-projeto"),
        RouteEntry::new("observabilidade", "Observabilidade", "/observabilidade"),
        RouteEntry::new("mensageria", "Mensageria", "/mensageria"),
        RouteEntry::new("resiliencia", "Resiliência", "/resiliencia"),
        RouteEntry::new("seguranca", "Segurança", "/seguranca"),
        RouteEntry::new("deploy", "Deploy", "/deploy"),
        RouteEntry::new("testes", "Testes", "/testes"),
        RouteEntry::new("extensibilidade", "Extensibilidade", "/extensibilidade"),
        RouteEntry::new("como-contribuir", "Como Contribuir", "/como-contribuir"),
        RouteEntry::new("conclusao", "Conclusão", "/conclusao"),
    ])
}

/// Content source for the document.
pub struct DocumentPages;

impl PageSource for DocumentPages {
    fn page(&self, route_id: &str) -> Option<ViewNode> {
        match route_id {
            "home" => Some(home::page()),
            "visao-geral-arquitetura" => Some(visao_geral::page()),
            "estrutura-projeto" => Some(estrutura::page()),
            "observabilidade" => Some(observabilidade::page()),
            "mensageria" => Some(mensageria::page()),
            "resiliencia" => Some(resiliencia::page()),
            "seguranca" => Some(seguranca::page()),
            "deploy" => Some(deploy::page()),
            "testes" => Some(testes::page()),
            "extensibilidade" => Some(extensibilidade::page()),
            "como-contribuir" => Some(como_contribuir::page()),
            "conclusao" => Some(conclusao::page()),
            _ => None,
        }
    }

    fn not_found(&self) -> ViewNode {
        ViewNode::group(vec![
            ViewNode::heading(1, "Página não encontrada"),
            ViewNode::muted("O endereço acessado não corresponde a nenhuma página do documento."),
            ViewNode::Link(LinkView::internal("/", "Voltar à Introdução")),
        ])
    }
}

/// The fully wired document site.
pub fn document() -> Result<Site<DocumentPages>, RouteTableError> {
    Ok(Site::new(routes()?, DocumentPages))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_table_is_valid_with_twelve_pages() {
        let table = routes().unwrap();
        assert_eq!(table.len(), 12);
        assert_eq!(table.get(0).unwrap().path, "/");
        assert_eq!(table.get(11).unwrap().path, "/conclusao");
    }

    #[test]
    fn every_route_has_page_content() {
        let table = routes().unwrap();
        for entry in table.iter() {
            assert!(
                DocumentPages.page(&entry.id).is_some(),
                "route '{}' has no page",
                entry.id
            );
        }
    }

    #[test]
    fn unknown_route_id_has_no_page() {
        assert!(DocumentPages.page("nao-existe").is_none());
    }

    #[test]
    fn not_found_page_links_back_home() {
        let body = DocumentPages.not_found();
        let targets: Vec<&str> = body.links().iter().map(|l| l.to.as_str()).collect();
        assert_eq!(targets, vec!["/"]);
    }

    #[test]
    fn page_internal_links_stay_inside_the_route_table() {
        let table = routes().unwrap();
        for entry in table.iter() {
            let body = DocumentPages.page(&entry.id).unwrap();
            for link in body.links() {
                if !link.external {
                    assert!(
                        table.find_by_path(&link.to).is_some(),
                        "page '{}' links to unknown path '{}'",
                        entry.id,
                        link.to
                    );
                }
            }
        }
    }
}

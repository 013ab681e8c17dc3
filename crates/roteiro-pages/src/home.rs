//! Introdução: landing page with the hero section and feature grid.

use roteiro_api::{LinkView, ViewNode};

pub fn page() -> ViewNode {
    ViewNode::group(vec![hero(), features(), about(), call_to_action()])
}

fn hero() -> ViewNode {
    ViewNode::group(vec![
        ViewNode::heading(1, "Sistema de Pagamentos"),
        ViewNode::heading(2, "Java 8 + Microserviços"),
        ViewNode::muted(
            "Uma arquitetura robusta e escalável para sistemas de pagamento, desenvolvida com \
             Java 8 e preparada para evolução. Um projeto de código aberto focado em colaboração \
             e aprendizado.",
        ),
        ViewNode::Link(LinkView::internal(
            "/visao-geral-arquitetura",
            "Explorar Arquitetura",
        )),
        ViewNode::Link(LinkView::internal("/como-contribuir", "Como Contribuir")),
    ])
}

fn features() -> ViewNode {
    ViewNode::columns(vec![
        ViewNode::card("Microserviços")
            .description("Arquitetura desacoplada com serviços independentes")
            .child(ViewNode::muted(
                "Cada serviço é responsável por um domínio específico, garantindo modularidade, \
                 escalabilidade e facilidade de manutenção.",
            )),
        ViewNode::card("Tecnologias Modernas")
            .description("Stack completo com Spring Boot, Kafka e AWS")
            .child(ViewNode::muted(
                "Utiliza as melhores práticas e tecnologias do mercado para garantir \
                 performance, segurança e confiabilidade.",
            )),
        ViewNode::card("Colaboração")
            .description("Projeto aberto para aprendizado e contribuições")
            .child(ViewNode::muted(
                "Desenvolvedores de todos os níveis são bem-vindos para contribuir, \
                 aprender e evoluir o sistema em conjunto.",
            )),
    ])
}

fn about() -> ViewNode {
    ViewNode::section("Sobre o Projeto").child(ViewNode::text(
        "O pagamento-system nasceu da necessidade de uma referência prática de arquitetura \
         de pagamentos em microserviços. Toda decisão de design é documentada nas páginas \
         seguintes, da visão geral da arquitetura até o guia de contribuição.",
    ))
}

fn call_to_action() -> ViewNode {
    ViewNode::section("Pronto para Começar?")
        .child(ViewNode::text(
            "Percorra o documento na ordem sugerida ou vá direto ao tema de interesse.",
        ))
        .child(ViewNode::Link(LinkView::internal(
            "/estrutura-projeto",
            "Conhecer a Estrutura do Projeto",
        )))
}

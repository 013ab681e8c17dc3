//! Visão Geral da Arquitetura.

use roteiro_api::ViewNode;

pub fn page() -> ViewNode {
    ViewNode::group(vec![
        ViewNode::heading(1, "Visão Geral da Arquitetura"),
        ViewNode::muted(
            "Uma arquitetura de microserviços desacoplados para sistemas de pagamento \
             robustos e escaláveis.",
        ),
        concepts(),
        technologies(),
        principles(),
    ])
}

fn concepts() -> ViewNode {
    ViewNode::section("Conceitos Fundamentais")
        .child(ViewNode::text(
            "O pagamento-system adota uma arquitetura de microserviços desacoplados. Cada \
             serviço é responsável por um domínio específico, garantindo modularidade, \
             escalabilidade e facilidade de manutenção. A comunicação entre os serviços é \
             realizada via REST e mensageria assíncrona (Apache Kafka), conforme a \
             necessidade de cada interação.",
        ))
        .child(ViewNode::heading(3, "Benefícios da Arquitetura"))
        .child(ViewNode::bullets([
            "Escalabilidade: cada serviço pode ser escalado independentemente",
            "Manutenibilidade: mudanças em um serviço não afetam outros",
            "Resiliência: falhas isoladas não comprometem todo o sistema",
            "Flexibilidade: tecnologias diferentes podem ser usadas por serviço",
        ]))
}

fn technologies() -> ViewNode {
    let tech = [
        ("Java 8+", "Base do projeto com transição para versões mais recentes"),
        ("Spring Boot", "Framework para desenvolvimento de microserviços"),
        ("Apache Kafka", "Comunicação assíncrona e processamento de eventos"),
        ("AWS", "Serviços de nuvem (S3, SNS, SQS)"),
        ("Docker", "Conteinerização dos serviços"),
        ("Kubernetes", "Orquestração e escalabilidade"),
        ("GitHub Actions", "Automação de CI/CD"),
    ];
    let mut section = ViewNode::section("Principais Tecnologias");
    let cards = tech
        .iter()
        .map(|(name, description)| ViewNode::card(*name).child(ViewNode::muted(*description)))
        .collect();
    section = section.child(ViewNode::columns(cards));
    section
}

fn principles() -> ViewNode {
    ViewNode::columns(vec![
        ViewNode::card("Microserviços")
            .child(ViewNode::muted(
                "Cada serviço é independente e responsável por uma funcionalidade específica, \
                 permitindo desenvolvimento, teste e deploy isolados.",
            ))
            .child(ViewNode::badge("Pix Service"))
            .child(ViewNode::badge("Boleto Service"))
            .child(ViewNode::badge("Card Service"))
            .child(ViewNode::badge("Gateway Service")),
        ViewNode::card("Comunicação")
            .child(ViewNode::muted(
                "Comunicação híbrida usando REST para operações síncronas e Kafka para \
                 eventos assíncronos e processamento de mensagens.",
            ))
            .child(ViewNode::badge("REST APIs"))
            .child(ViewNode::badge("Apache Kafka"))
            .child(ViewNode::badge("Event Streaming")),
    ])
}

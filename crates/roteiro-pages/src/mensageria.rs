//! Mensageria: comunicação assíncrona com Apache Kafka.

use roteiro_api::ViewNode;

pub fn page() -> ViewNode {
    ViewNode::group(vec![
        ViewNode::heading(1, "Mensageria"),
        ViewNode::muted("Comunicação assíncrona e processamento de eventos com Apache Kafka."),
        ViewNode::text(
            "A utilização de um sistema de mensageria assíncrona é um pilar importante para a \
             resiliência e escalabilidade de sistemas de pagamento. O Apache Kafka é \
             empregado para gerenciar eventos e garantir a comunicação desacoplada entre os \
             serviços, permitindo que o sistema seja mais robusto e responsivo.",
        ),
        topics(),
        patterns(),
        benefits(),
    ])
}

fn topic(name: &str, description: &str, producers: &str, consumers: &str) -> ViewNode {
    ViewNode::card(name)
        .description(description)
        .child(ViewNode::muted(format!("Produtores: {producers}")))
        .child(ViewNode::muted(format!("Consumidores: {consumers}")))
}

fn topics() -> ViewNode {
    ViewNode::section("Principais Tópicos").child(ViewNode::columns(vec![
        topic(
            "payment.created",
            "Evento disparado quando um novo pagamento é criado",
            "Gateway Service",
            "Notification Service, Audit Service",
        ),
        topic(
            "payment.approved",
            "Evento disparado quando um pagamento é aprovado",
            "Pix Service, Card Service, Boleto Service",
            "Notification Service, Reconciliation Service",
        ),
        topic(
            "payment.rejected",
            "Evento disparado quando um pagamento é rejeitado",
            "Pix Service, Card Service, Boleto Service",
            "Notification Service, Fraud Service",
        ),
        topic(
            "payment.refunded",
            "Evento disparado quando um pagamento é estornado",
            "Refund Service",
            "Notification Service, Accounting Service",
        ),
    ]))
}

fn patterns() -> ViewNode {
    ViewNode::section("Padrões de Mensageria").child(ViewNode::columns(vec![
        ViewNode::card("Event Sourcing")
            .description("Armazenamento de eventos como fonte única da verdade")
            .child(ViewNode::bullets([
                "Auditoria completa",
                "Replay de eventos",
                "Evolução do modelo",
                "Debugging facilitado",
            ])),
        ViewNode::card("CQRS")
            .description("Separação entre comandos e consultas")
            .child(ViewNode::bullets([
                "Escalabilidade independente",
                "Modelos otimizados",
                "Performance melhorada",
                "Flexibilidade arquitetural",
            ])),
        ViewNode::card("Saga Pattern")
            .description("Coordenação de transações distribuídas")
            .child(ViewNode::bullets([
                "Consistência eventual",
                "Compensação automática",
                "Resiliência a falhas",
                "Transações longas",
            ])),
    ]))
}

fn benefits() -> ViewNode {
    ViewNode::section("Benefícios da Mensageria Assíncrona").child(ViewNode::columns(vec![
        ViewNode::card("Desacoplamento").child(ViewNode::bullets([
            "Serviços independentes",
            "Evolução isolada",
            "Redução de dependências",
        ])),
        ViewNode::card("Escalabilidade").child(ViewNode::bullets([
            "Processamento paralelo",
            "Balanceamento de carga",
            "Elasticidade automática",
        ])),
        ViewNode::card("Resiliência").child(ViewNode::bullets([
            "Tolerância a falhas",
            "Reprocessamento",
            "Durabilidade de mensagens",
        ])),
    ]))
}

//! Testes: níveis de teste e automação.

use roteiro_api::ViewNode;

pub fn page() -> ViewNode {
    ViewNode::group(vec![
        ViewNode::heading(1, "Testes"),
        ViewNode::muted("Estratégia de testes em camadas para um domínio que não tolera regressões."),
        levels(),
        metrics(),
        automation(),
    ])
}

fn level(title: &str, description: &str, coverage: &str, tools: [&str; 4], features: [&str; 4]) -> ViewNode {
    let mut card = ViewNode::card(title)
        .description(description)
        .child(ViewNode::badge(format!("Cobertura alvo: {coverage}")))
        .child(ViewNode::bullets(features))
        .child(ViewNode::heading(4, "Ferramentas"));
    for tool in tools {
        card = card.child(ViewNode::badge(tool));
    }
    card
}

fn levels() -> ViewNode {
    ViewNode::section("Níveis de Teste").child(ViewNode::columns(vec![
        level(
            "Testes Unitários",
            "Validação isolada de componentes individuais",
            "85%",
            ["JUnit 5", "Mockito", "AssertJ", "TestContainers"],
            [
                "Testes de unidade para cada serviço",
                "Mocks de dependências externas",
                "Cobertura de código automatizada",
                "Execução rápida e isolada",
            ],
        ),
        level(
            "Testes de Integração",
            "Validação da comunicação entre componentes",
            "70%",
            ["Spring Boot Test", "TestContainers", "WireMock", "Kafka Test"],
            [
                "Testes com banco de dados real",
                "Integração com Kafka",
                "Mocks de APIs externas",
                "Cenários end-to-end",
            ],
        ),
        level(
            "Testes de Contrato",
            "Garantia de compatibilidade entre serviços",
            "60%",
            ["Spring Cloud Contract", "Pact", "OpenAPI", "JSON Schema"],
            [
                "Contratos entre produtores e consumidores",
                "Validação de APIs",
                "Versionamento de contratos",
                "Testes de compatibilidade",
            ],
        ),
        level(
            "Testes de Performance",
            "Validação de performance e escalabilidade",
            "40%",
            ["JMeter", "Gatling", "K6", "Artillery"],
            [
                "Testes de carga",
                "Testes de stress",
                "Testes de volume",
                "Análise de bottlenecks",
            ],
        ),
    ]))
}

fn metrics() -> ViewNode {
    ViewNode::section("Métricas de Qualidade").child(ViewNode::bullets([
        "Cobertura mínima exigida no pipeline: 80%",
        "Mutação de código nos módulos de pagamento",
        "Zero flaky tests tolerados na main",
    ]))
}

fn automation() -> ViewNode {
    ViewNode::section("Automação de Testes")
        .child(ViewNode::text(
            "Todos os níveis rodam no pipeline de cada pull request; os de performance rodam \
             em janela noturna contra o ambiente de staging.",
        ))
        .child(ViewNode::card("Pipeline de Testes Automatizados").child(ViewNode::bullets([
            "Unitários e de contrato a cada commit",
            "Integração a cada pull request",
            "Carga e stress agendados",
            "Relatórios publicados como artefatos do build",
        ])))
}

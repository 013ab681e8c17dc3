//! Observabilidade: os três pilares: logs, traces e métricas.

use roteiro_api::ViewNode;

pub fn page() -> ViewNode {
    ViewNode::group(vec![
        ViewNode::heading(1, "Observabilidade"),
        ViewNode::muted(
            "Monitoramento completo do sistema através dos três pilares da observabilidade.",
        ),
        ViewNode::text(
            "Em uma arquitetura de microserviços, a observabilidade é fundamental para \
             monitorar o comportamento do sistema, identificar problemas e garantir a saúde \
             das aplicações. O pagamento-system incorpora diversas ferramentas e práticas \
             para garantir uma observabilidade robusta através dos três pilares \
             fundamentais: logs, traces e métricas.",
        ),
        pillars(),
        implementation(),
    ])
}

fn pillar(title: &str, description: &str, features: [&str; 4], tools: [&str; 4]) -> ViewNode {
    let mut card = ViewNode::card(title)
        .description(description)
        .child(ViewNode::bullets(features));
    for tool in tools {
        card = card.child(ViewNode::badge(tool));
    }
    card
}

fn pillars() -> ViewNode {
    ViewNode::section("Os Três Pilares da Observabilidade").child(ViewNode::columns(vec![
        pillar(
            "Logs Estruturados",
            "Implementação com SLF4J e logs estruturados em formato JSON",
            [
                "Formato JSON padronizado",
                "Correlação de requests",
                "Níveis de log configuráveis",
                "Coleta centralizada",
            ],
            ["SLF4J", "Logback", "ELK Stack", "Fluentd"],
        ),
        pillar(
            "Tracing Distribuído",
            "Rastreamento de chamadas entre microserviços com OpenTelemetry",
            [
                "Trace de requests completos",
                "Identificação de gargalos",
                "Mapeamento de dependências",
                "Análise de latência",
            ],
            ["OpenTelemetry", "Jaeger", "Zipkin", "Spring Cloud Sleuth"],
        ),
        pillar(
            "Métricas",
            "Métricas de desempenho expostas via Actuator e coletadas pelo Prometheus",
            [
                "Métricas de aplicação",
                "Métricas de infraestrutura",
                "Alertas automáticos",
                "Dashboards visuais",
            ],
            ["Micrometer", "Prometheus", "Grafana", "Spring Boot Actuator"],
        ),
    ]))
}

fn implementation() -> ViewNode {
    ViewNode::section("Detalhes de Implementação")
        .child(
            ViewNode::card("Configuração de Logs").child(ViewNode::bullets([
                "Configuração centralizada via application.yml",
                "Padrões de log estruturado com campos obrigatórios",
                "Rotação automática de arquivos de log",
                "Integração com sistemas de coleta (Filebeat, Fluentd)",
            ])),
        )
        .child(
            ViewNode::card("Instrumentação").child(ViewNode::bullets([
                "Auto-instrumentação com OpenTelemetry Java Agent",
                "Spans customizados para operações críticas",
                "Baggage para propagação de contexto",
                "Sampling configurável por ambiente",
            ])),
        )
        .child(
            ViewNode::card("Métricas Customizadas").child(ViewNode::bullets([
                "Contadores de transações por tipo de pagamento",
                "Histogramas de tempo de resposta",
                "Gauges para recursos do sistema",
                "Métricas de negócio (taxa de aprovação, volume)",
            ])),
        )
}

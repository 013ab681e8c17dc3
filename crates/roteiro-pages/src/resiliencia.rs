//! Resiliência: padrões de tolerância a falhas com Resilience4j.

use roteiro_api::ViewNode;

pub fn page() -> ViewNode {
    ViewNode::group(vec![
        ViewNode::heading(1, "Resiliência"),
        ViewNode::muted(
            "Padrões e estratégias para manter o sistema estável mesmo diante de falhas.",
        ),
        patterns(),
        fallbacks(),
        resilience4j(),
        monitoring(),
    ])
}

fn pattern(title: &str, description: &str, benefits: [&str; 4], configuration: [&str; 4]) -> ViewNode {
    ViewNode::card(title)
        .description(description)
        .child(ViewNode::heading(4, "Benefícios"))
        .child(ViewNode::bullets(benefits))
        .child(ViewNode::heading(4, "Configuração"))
        .child(ViewNode::bullets(configuration))
}

fn patterns() -> ViewNode {
    ViewNode::section("Padrões de Resiliência").child(ViewNode::columns(vec![
        pattern(
            "Circuit Breaker",
            "Previne cascata de falhas isolando serviços com problemas",
            [
                "Isolamento de falhas",
                "Recuperação automática",
                "Proteção contra sobrecarga",
                "Feedback rápido",
            ],
            [
                "Threshold de falhas: 50%",
                "Timeout: 60 segundos",
                "Tentativas no half-open: 3",
                "Janela de medição: 10 requests",
            ],
        ),
        pattern(
            "Retry",
            "Reexecução automática de operações que falharam temporariamente",
            [
                "Recuperação de falhas temporárias",
                "Melhoria da disponibilidade",
                "Transparência para o cliente",
                "Configuração flexível",
            ],
            [
                "Máximo de tentativas: 3",
                "Delay inicial: 1 segundo",
                "Multiplicador: 2x",
                "Jitter: 10%",
            ],
        ),
        pattern(
            "Rate Limiter",
            "Controla a taxa de requisições para proteger contra sobrecarga",
            [
                "Proteção contra DDoS",
                "Garantia de SLA",
                "Distribuição justa de recursos",
                "Prevenção de sobrecarga",
            ],
            [
                "Limite: 100 req/min",
                "Burst: 10 requests",
                "Timeout: 5 segundos",
                "Scope: por usuário",
            ],
        ),
        pattern(
            "Timeout",
            "Define limites de tempo para operações evitando travamentos",
            [
                "Prevenção de travamentos",
                "Liberação de recursos",
                "Experiência previsível",
                "Detecção de problemas",
            ],
            [
                "Connection: 5 segundos",
                "Read: 30 segundos",
                "Write: 10 segundos",
                "Total: 60 segundos",
            ],
        ),
    ]))
}

fn fallbacks() -> ViewNode {
    ViewNode::section("Estratégias de Fallback").child(ViewNode::bullets([
        "Serviço de notificação indisponível: armazenar em fila para reprocessamento",
        "Gateway de cartão fora do ar: direcionar para processadora secundária",
        "Consulta de antifraude lenta: aprovar transações de baixo risco com análise posterior",
    ]))
}

fn resilience4j() -> ViewNode {
    ViewNode::section("Implementação com Resilience4j")
        .child(ViewNode::text(
            "Os padrões são aplicados de forma declarativa com anotações do Resilience4j, \
             mantendo a lógica de negócio separada da política de resiliência.",
        ))
        .child(ViewNode::code(
            "java",
            "@CircuitBreaker(name = \"cardService\", fallbackMethod = \"fallbackAuthorize\")\n\
             @Retry(name = \"cardService\")\n\
             public PaymentResult authorize(PaymentRequest request) {\n\
                 return cardClient.authorize(request);\n\
             }",
        ))
}

fn monitoring() -> ViewNode {
    ViewNode::section("Monitoramento de Resiliência")
        .child(ViewNode::card("Métricas Expostas").child(ViewNode::bullets([
            "Estado dos circuit breakers",
            "Taxa de retries por serviço",
            "Requisições rejeitadas pelo rate limiter",
            "Distribuição de timeouts",
        ])))
        .child(ViewNode::card("Alertas Automáticos").child(ViewNode::bullets([
            "Circuit breaker aberto por mais de 5 minutos",
            "Taxa de fallback acima de 10%",
            "Esgotamento recorrente de retries",
        ])))
}

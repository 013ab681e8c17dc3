//! Extensibilidade: pontos de extensão e estratégia de migração.

use roteiro_api::ViewNode;

pub fn page() -> ViewNode {
    ViewNode::group(vec![
        ViewNode::heading(1, "Extensibilidade"),
        ViewNode::muted(
            "Projetado para crescer: novos métodos de pagamento sem tocar o núcleo do sistema.",
        ),
        features(),
        example(),
        migration(),
    ])
}

fn feature(title: &str, description: &str, benefits: [&str; 4], implementation: [&str; 4]) -> ViewNode {
    ViewNode::card(title)
        .description(description)
        .child(ViewNode::bullets(benefits))
        .child(ViewNode::heading(4, "Implementação"))
        .child(ViewNode::bullets(implementation))
}

fn features() -> ViewNode {
    ViewNode::section("Características de Extensibilidade").child(ViewNode::columns(vec![
        feature(
            "Arquitetura Plugável",
            "Sistema permite adicionar novos métodos de pagamento sem impactar o core",
            [
                "Novos métodos de pagamento",
                "Integrações com terceiros",
                "Funcionalidades customizadas",
                "Adaptação a regulamentações",
            ],
            [
                "Interface PaymentProcessor",
                "Factory Pattern",
                "Dependency Injection",
                "Configuration Properties",
            ],
        ),
        feature(
            "APIs REST Padronizadas",
            "Interfaces consistentes facilitam integração e adição de funcionalidades",
            [
                "Integração simplificada",
                "Documentação automática",
                "Versionamento de APIs",
                "Contratos bem definidos",
            ],
            [
                "OpenAPI 3.0",
                "Spring Boot Starter Web",
                "Richardson Maturity Model",
                "HATEOAS",
            ],
        ),
        feature(
            "Integrações Centralizadas",
            "Integrações com terceiros isoladas em serviços específicos",
            [
                "Manutenção simplificada",
                "Evolução independente",
                "Testes isolados",
                "Reutilização de código",
            ],
            [
                "Adapter Pattern",
                "Circuit Breaker",
                "Retry Mechanisms",
                "Configuration Management",
            ],
        ),
        feature(
            "Event-Driven Architecture",
            "Eventos permitem extensão sem modificar código existente",
            [
                "Baixo acoplamento",
                "Extensão por eventos",
                "Processamento assíncrono",
                "Escalabilidade horizontal",
            ],
            ["Apache Kafka", "Event Sourcing", "CQRS Pattern", "Saga Pattern"],
        ),
    ]))
}

fn example() -> ViewNode {
    ViewNode::section("Exemplos de Extensão")
        .child(ViewNode::text(
            "Um novo método de pagamento implementa a interface PaymentProcessor e é \
             registrado por configuração; o gateway passa a roteá-lo sem alteração de código.",
        ))
        .child(ViewNode::code(
            "java",
            "public class CryptoProcessor implements PaymentProcessor {\n\
             \x20   @Override\n\
             \x20   public PaymentResult process(PaymentRequest request) {\n\
             \x20       return cryptoGateway.submit(request);\n\
             \x20   }\n\
             }",
        ))
}

fn migration() -> ViewNode {
    ViewNode::section("Estratégia de Migração")
        .child(ViewNode::card("Java 8 → Java 17").child(ViewNode::bullets([
            "Compatibilidade validada módulo a módulo",
            "Toolchains por serviço no build",
            "Migração incremental sem janela de parada",
        ])))
        .child(ViewNode::card("Modernização Contínua").child(ViewNode::bullets([
            "Dependências atualizadas por bot de versão",
            "Deprecações tratadas a cada ciclo",
            "Benchmarks antes e depois de cada upgrade",
        ])))
}

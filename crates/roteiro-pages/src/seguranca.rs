//! Segurança: camadas de proteção e compliance.

use roteiro_api::ViewNode;

pub fn page() -> ViewNode {
    ViewNode::group(vec![
        ViewNode::heading(1, "Segurança"),
        ViewNode::muted(
            "Proteção em camadas para dados sensíveis de pagamento, do transporte à auditoria.",
        ),
        layers(),
        standards(),
        auth_flow(),
    ])
}

fn layer(title: &str, description: &str, features: [&str; 4], implementation: [&str; 4]) -> ViewNode {
    ViewNode::card(title)
        .description(description)
        .child(ViewNode::bullets(features))
        .child(ViewNode::heading(4, "Implementação"))
        .child(ViewNode::bullets(implementation))
}

fn layers() -> ViewNode {
    ViewNode::section("Camadas de Segurança").child(ViewNode::columns(vec![
        layer(
            "Comunicação TLS",
            "Criptografia de dados em trânsito entre todos os serviços",
            [
                "TLS 1.3 para todas as comunicações",
                "Certificados gerenciados automaticamente",
                "Keystore e Truststore configurados",
                "Mutual TLS (mTLS) entre serviços",
            ],
            [
                "Spring Boot SSL configuration",
                "Certificados Let's Encrypt",
                "Renovação automática",
                "Cipher suites seguros",
            ],
        ),
        layer(
            "Gerenciamento de Segredos",
            "HashiCorp Vault para armazenamento seguro de credenciais",
            [
                "Credenciais de banco de dados",
                "Chaves de API de terceiros",
                "Certificados e chaves privadas",
                "Rotação automática de segredos",
            ],
            [
                "Vault Agent para injeção",
                "Dynamic secrets",
                "Lease management",
                "Audit logging",
            ],
        ),
        layer(
            "Autenticação OAuth2/JWT",
            "Sistema robusto de autenticação e autorização",
            [
                "OAuth2 Authorization Code Flow",
                "JWT tokens com assinatura",
                "Refresh tokens seguros",
                "Scopes granulares",
            ],
            [
                "Spring Security OAuth2",
                "JWT com RS256",
                "Token introspection",
                "RBAC (Role-Based Access Control)",
            ],
        ),
        layer(
            "Auditoria e Monitoramento",
            "Rastreamento completo de atividades de segurança",
            [
                "Logs de auditoria estruturados",
                "Rastreamento de acessos",
                "Detecção de anomalias",
                "Alertas de segurança",
            ],
            [
                "Spring Boot Actuator",
                "Custom audit events",
                "SIEM integration",
                "Real-time monitoring",
            ],
        ),
    ]))
}

fn standards() -> ViewNode {
    ViewNode::section("Padrões de Compliance").child(ViewNode::columns(vec![
        ViewNode::card("PCI DSS")
            .description("Payment Card Industry Data Security Standard")
            .child(ViewNode::bullets([
                "Criptografia de dados de cartão",
                "Rede segura e protegida",
                "Controle de acesso rigoroso",
                "Monitoramento contínuo",
            ])),
        ViewNode::card("LGPD")
            .description("Lei Geral de Proteção de Dados")
            .child(ViewNode::bullets([
                "Consentimento explícito",
                "Minimização de dados",
                "Direito ao esquecimento",
                "Relatório de incidentes",
            ])),
    ]))
}

fn auth_flow() -> ViewNode {
    ViewNode::section("Fluxo de Autenticação e Autorização").child(ViewNode::bullets([
        "Cliente obtém token JWT no auth-service via OAuth2",
        "Gateway valida assinatura e escopos do token",
        "Serviços internos confiam no contexto propagado via mTLS",
        "Toda decisão de acesso é registrada para auditoria",
    ]))
}

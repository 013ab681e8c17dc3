//! Estrutura do Projeto: serviços e módulos compartilhados.

use roteiro_api::ViewNode;

pub fn page() -> ViewNode {
    ViewNode::group(vec![
        ViewNode::heading(1, "Estrutura do Projeto"),
        ViewNode::muted(
            "Organização modular em microserviços independentes e componentes compartilhados.",
        ),
        ViewNode::text(
            "O projeto pagamento-system é organizado em módulos independentes, cada um \
             representando um microserviço ou um componente compartilhado. Essa estrutura \
             facilita o desenvolvimento, teste e implantação de cada parte do sistema de \
             forma isolada.",
        ),
        payment_services(),
        core_services(),
        shared_modules(),
        benefits(),
    ])
}

fn service_card(name: &str, description: &str, features: [&str; 3]) -> ViewNode {
    ViewNode::card(name)
        .description(description)
        .child(ViewNode::heading(4, "Funcionalidades"))
        .child(ViewNode::bullets(features))
}

fn payment_services() -> ViewNode {
    ViewNode::section("Serviços de Pagamento")
        .child(ViewNode::muted(
            "Cada método de pagamento possui seu próprio serviço especializado, encapsulando \
             toda a lógica de negócio e integrações específicas.",
        ))
        .child(ViewNode::columns(vec![
            service_card(
                "pix-service",
                "Serviço específico para processamento de pagamentos via Pix",
                ["Integração com BACEN", "QR Code dinâmico", "Webhook de confirmação"],
            ),
            service_card(
                "boleto-service",
                "Serviço para geração e processamento de boletos bancários",
                ["Geração de boletos", "Integração bancária", "Controle de vencimento"],
            ),
            service_card(
                "card-service",
                "Processamento de pagamentos com cartão de crédito e débito",
                ["Tokenização", "Antifraude", "Processamento 3DS"],
            ),
        ]))
}

fn core_services() -> ViewNode {
    ViewNode::section("Serviços Principais").child(ViewNode::columns(vec![
        service_card(
            "gateway-service",
            "Ponto de entrada unificado que roteia e orquestra chamadas entre serviços",
            ["Roteamento inteligente", "Load balancing", "Rate limiting"],
        ),
        service_card(
            "auth-service",
            "Responsável pela autenticação e autorização com tokens JWT",
            ["OAuth2", "JWT tokens", "RBAC"],
        ),
        service_card(
            "asaas-service",
            "Integração dedicada com a API da plataforma Asaas",
            ["API wrapper", "Webhook handling", "Sync de dados"],
        ),
    ]))
}

fn shared_modules() -> ViewNode {
    let modules = [
        ("common", "DTOs, utilitários e validações compartilhadas"),
        ("observability", "Funcionalidades de monitoramento e rastreamento"),
        ("security", "Componentes de segurança transversais"),
        ("messaging", "Gerenciamento de mensageria e eventos"),
    ];
    let cards = modules
        .iter()
        .map(|(name, description)| ViewNode::card(*name).child(ViewNode::muted(*description)))
        .collect();
    ViewNode::section("Módulos Compartilhados").child(ViewNode::columns(cards))
}

fn benefits() -> ViewNode {
    ViewNode::section("Benefícios da Estrutura Modular").child(ViewNode::bullets([
        "Desenvolvimento paralelo entre times",
        "Deploy independente por serviço",
        "Isolamento de falhas e de dependências",
        "Reutilização dos módulos compartilhados",
    ]))
}

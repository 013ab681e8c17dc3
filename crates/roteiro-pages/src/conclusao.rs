//! Conclusão: impacto do projeto e roadmap.

use roteiro_api::ViewNode;

pub fn page() -> ViewNode {
    ViewNode::group(vec![
        ViewNode::heading(1, "Conclusão"),
        ViewNode::muted(
            "Uma jornada de colaboração, aprendizado e inovação em sistemas de pagamento.",
        ),
        impact(),
        roadmap(),
        values(),
    ])
}

fn impact() -> ViewNode {
    ViewNode::section("Impacto do Projeto").child(ViewNode::columns(vec![
        ViewNode::card("Aprendizado Colaborativo")
            .description("Uma plataforma onde desenvolvedores aprendem uns com os outros")
            .child(ViewNode::bullets([
                "Troca de experiências práticas",
                "Mentoria entre pares",
                "Networking profissional",
                "Crescimento conjunto",
            ])),
        ViewNode::card("Tecnologia de Ponta")
            .description("Implementação de práticas modernas em sistemas de pagamento")
            .child(ViewNode::bullets([
                "Arquitetura de microserviços",
                "Observabilidade completa",
                "Segurança robusta",
                "Escalabilidade horizontal",
            ])),
        ViewNode::card("Impacto Real")
            .description("Um projeto que pode ser usado como referência na indústria")
            .child(ViewNode::bullets([
                "Código de produção",
                "Boas práticas documentadas",
                "Casos de uso reais",
                "Evolução contínua",
            ])),
    ]))
}

fn roadmap() -> ViewNode {
    ViewNode::section("Roadmap Futuro").child(ViewNode::columns(vec![
        ViewNode::card("Curto Prazo (3-6 meses)").child(ViewNode::bullets([
            "Migração para Java 11",
            "Implementação de novos métodos de pagamento",
            "Melhoria da documentação",
            "Expansão da suite de testes",
        ])),
        ViewNode::card("Médio Prazo (6-12 meses)").child(ViewNode::bullets([
            "Migração para Java 17",
            "Machine learning para antifraude",
            "Dashboard de monitoramento",
            "API GraphQL",
        ])),
        ViewNode::card("Longo Prazo (1-2 anos)").child(ViewNode::bullets([
            "Suporte a criptomoedas",
            "Integração com Open Banking",
            "Compliance internacional",
            "Plataforma multi-tenant",
        ])),
    ]))
}

fn values() -> ViewNode {
    ViewNode::section("Valores da Comunidade")
        .child(ViewNode::bullets([
            "Colaboração: o conhecimento cresce quando compartilhado",
            "Aprendizado contínuo: toda contribuição ensina algo",
            "Qualidade: sistemas de pagamento não admitem atalhos",
            "Inclusão: desenvolvedores de todos os níveis são bem-vindos",
        ]))
        .child(ViewNode::heading(3, "Junte-se à Nossa Jornada"))
        .child(ViewNode::text(
            "O pagamento-system continua evoluindo — e o próximo passo pode ser seu.",
        ))
}

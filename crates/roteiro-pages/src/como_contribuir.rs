//! Como Contribuir: guia de contribuição para o projeto.

use roteiro_api::{LinkView, ViewNode};

pub fn page() -> ViewNode {
    ViewNode::group(vec![
        ViewNode::heading(1, "Como Contribuir"),
        ViewNode::muted(
            "Um projeto aberto: toda contribuição de código, documentação ou testes é bem-vinda.",
        ),
        contribution_types(),
        steps(),
        guidelines(),
        ready(),
    ])
}

fn contribution_types() -> ViewNode {
    ViewNode::section("Tipos de Contribuição").child(ViewNode::columns(vec![
        ViewNode::card("Desenvolvimento de Código")
            .description("Novas funcionalidades, correções de bugs e melhorias")
            .child(ViewNode::bullets([
                "Implementar novos métodos de pagamento",
                "Corrigir bugs reportados",
                "Melhorar performance",
                "Adicionar testes",
            ])),
        ViewNode::card("Documentação")
            .description("Melhore a documentação técnica e guias de uso")
            .child(ViewNode::bullets([
                "Atualizar README.md",
                "Criar tutoriais",
                "Documentar APIs",
                "Traduzir conteúdo",
            ])),
        ViewNode::card("Testes e QA")
            .description("Garanta a qualidade através de testes e validações")
            .child(ViewNode::bullets([
                "Escrever testes unitários",
                "Criar testes de integração",
                "Reportar bugs",
                "Validar funcionalidades",
            ])),
    ]))
}

fn step(n: u8, title: &str, description: &str, command: &str) -> ViewNode {
    ViewNode::card(format!("{n}. {title}"))
        .description(description)
        .child(ViewNode::code("bash", command))
}

fn steps() -> ViewNode {
    ViewNode::section("Guia Passo a Passo")
        .child(step(
            1,
            "Fork do Repositório",
            "Faça um fork do repositório para sua conta GitHub e clone localmente",
            "git clone https://github.com/SEU_USUARIO/pagamento-system.git",
        ))
        .child(step(
            2,
            "Configuração do Ambiente",
            "Instale Java 8+, Maven e Docker; valide o setup executando os testes",
            "./mvnw clean install -DskipTests && docker-compose up -d",
        ))
        .child(step(
            3,
            "Escolha uma Tarefa",
            "Procure issues com as labels \"good first issue\" ou \"help wanted\"",
            "git checkout -b feature/sua-nova-funcionalidade",
        ))
        .child(step(
            4,
            "Desenvolvimento e Pull Request",
            "Siga os padrões do projeto, escreva testes e abra o pull request",
            "git push origin feature/sua-nova-funcionalidade",
        ))
}

fn guidelines() -> ViewNode {
    ViewNode::section("Diretrizes da Comunidade").child(ViewNode::bullets([
        "Seja respeitoso nas discussões e revisões",
        "Descreva claramente o problema e a solução no pull request",
        "Mantenha mudanças pequenas e focadas",
        "Dúvidas são bem-vindas nas issues e discussões do repositório",
    ]))
}

fn ready() -> ViewNode {
    ViewNode::section("Pronto para Contribuir?")
        .child(ViewNode::text(
            "Comece pela estrutura do projeto para entender onde cada mudança se encaixa.",
        ))
        .child(ViewNode::Link(LinkView::internal(
            "/estrutura-projeto",
            "Rever a Estrutura do Projeto",
        )))
}
